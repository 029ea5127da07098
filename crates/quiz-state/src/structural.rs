//! 結構相等比較
//!
//! 先把值序列化成 [`serde_json::Value`]，再依類別分派比較：
//!
//! - 缺值（`Null`）：兩邊都缺值才相等
//! - 純量（布林、數值、字串）：值相等
//! - 序列（`Array`）：以索引為鍵，長度相同且逐項相等，順序有意義
//! - 映射（`Object`）：鍵集合相同且逐鍵相等，鍵順序無意義
//!
//! 不同類別一律不相等（序列與映射也不相等）。輸入必須無環；
//! 由 serde 產生的 `Value` 本身不可能有環。

use quiz_core::{NumberEquality, Result};
use serde::Serialize;
use serde_json::{Number, Value};

/// 以預設數值比較方式判斷兩個值是否結構相等
pub fn structurally_equal<T: Serialize + ?Sized>(a: &T, b: &T) -> Result<bool> {
    structurally_equal_with(a, b, NumberEquality::default())
}

/// 以指定數值比較方式判斷兩個值是否結構相等
pub fn structurally_equal_with<T: Serialize + ?Sized>(
    a: &T,
    b: &T,
    mode: NumberEquality,
) -> Result<bool> {
    if std::ptr::eq(a, b) {
        return Ok(true);
    }

    let left = serde_json::to_value(a)?;
    let right = serde_json::to_value(b)?;
    Ok(values_equal(&left, &right, mode))
}

/// 比較兩個已序列化的值
pub fn values_equal(a: &Value, b: &Value, mode: NumberEquality) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,

        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y, mode),
        (Value::String(x), Value::String(y)) => x == y,

        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(x, y)| values_equal(x, y, mode))
        }

        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs.iter().all(|(key, x)| match ys.get(key) {
                    Some(y) => values_equal(x, y, mode),
                    None => false,
                })
        }

        _ => false,
    }
}

/// `Numeric` 一律轉為 f64 比較，與文件資料庫的數值語義一致並保持遞移性；
/// 超過 2^53 的整數會因此失去精度，需要區分時使用 `Exact`。
fn numbers_equal(x: &Number, y: &Number, mode: NumberEquality) -> bool {
    match mode {
        NumberEquality::Exact => x == y,
        NumberEquality::Numeric => match (x.as_f64(), y.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => x == y,
        },
    }
}
