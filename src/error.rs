use js_sys::Object;
use wasm_bindgen::JsValue;

use divconq::{Error, InvalidInput};

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

fn param_obj(param: &str) -> Object {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param)); d
}

#[inline]
pub fn non_finite(param: &str, index: usize) -> JsValue {
    let d = param_obj(param);
    set_kv(&d, "index", &JsValue::from_f64(index as f64));
    err("non_finite", format!("parameter '{}' must be finite (index {})", param, index), Some(d.into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = param_obj(param);
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "max", &JsValue::from_f64(max));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn length_mismatch(xs: usize, ys: usize) -> JsValue {
    let d = new_obj();
    set_kv(&d, "xs", &JsValue::from_f64(xs as f64));
    set_kv(&d, "ys", &JsValue::from_f64(ys as f64));
    err("length_mismatch", "xs and ys must have the same length", Some(d.into()))
}

#[inline]
pub fn invalid_input(param: &str, message: String) -> JsValue {
    err("invalid_input", message, Some(param_obj(param).into()))
}

#[inline]
pub fn invalid_digit(param: &str, position: usize, found: char) -> JsValue {
    let d = param_obj(param);
    set_kv(&d, "position", &JsValue::from_f64(position as f64));
    set_kv(&d, "found", &JsValue::from_str(&found.to_string()));
    err("invalid_digit", format!("parameter '{}' has a non-digit at {}", param, position), Some(d.into()))
}

#[inline]
pub fn serialize(e: serde_wasm_bindgen::Error) -> JsValue {
    err("serialize", e.to_string(), None)
}

/// Maps a core error for `param` to its envelope code.
pub fn from_core(param: &str, e: &Error) -> JsValue {
    match e {
        Error::InvalidInput(InvalidInput::NonFiniteCoordinate { index }) => non_finite(param, *index),
        Error::InvalidInput(InvalidInput::NonDigit { position, found }) => invalid_digit(param, *position, *found),
        Error::InvalidInput(_) => invalid_input(param, e.to_string()),
    }
}
