//! 序列化輔助

use serde::{Deserialize, Deserializer};

/// 把 `null` 視為空序列
///
/// 搭配 `#[serde(default)]` 使用：欄位缺少或為 `null` 都得到空 `Vec`。
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
