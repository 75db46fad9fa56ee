use serde::{Deserialize, Serialize};

/// One table entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableValue {
    Bool(bool),
    Int(i32),
    Double(f64),
}

impl TableValue {
    pub fn as_int(&self) -> Option<i32> {
        match *self {
            TableValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            TableValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match *self {
            TableValue::Double(v) => Some(v),
            TableValue::Int(v) => Some(v as f64),
            TableValue::Bool(_) => None,
        }
    }
}

impl From<i32> for TableValue {
    fn from(v: i32) -> Self {
        TableValue::Int(v)
    }
}

impl From<bool> for TableValue {
    fn from(v: bool) -> Self {
        TableValue::Bool(v)
    }
}

impl From<f64> for TableValue {
    fn from(v: f64) -> Self {
        TableValue::Double(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        assert_eq!(TableValue::from(7).as_int(), Some(7));
        assert_eq!(TableValue::from(7).as_bool(), None);
        assert_eq!(TableValue::from(true).as_bool(), Some(true));
        assert_eq!(TableValue::from(3).as_double(), Some(3.0));
        assert_eq!(TableValue::from(false).as_double(), None);
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&[TableValue::Int(-4), TableValue::Bool(true)]).unwrap();
        assert_eq!(json, "[-4,true]");
    }
}
