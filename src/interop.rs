use js_sys::{Array, Float64Array, Object, Reflect};
use wasm_bindgen::JsValue;

use divconq::Point;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

pub fn arr_f64(data: &[f64]) -> Float64Array { Float64Array::from(data) }

pub fn point_arr(p: Point) -> Float64Array { arr_f64(&[p.x, p.y]) }

pub fn str_arr<'a>(items: impl IntoIterator<Item = &'a str>) -> Array {
    items.into_iter().map(JsValue::from_str).collect()
}
