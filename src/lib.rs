//! Browser bindings for the `divconq` cores.
//!
//! Every entry point returns a `{ ok, value | error }` envelope instead of
//! throwing, so callers can branch on `ok` and read `error.code`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use divconq::limits::{in_digit_bounds, in_point_bounds, MAX_DIGITS, MAX_POINTS, MAX_TRACE_DIGITS, MAX_TRACE_POINTS};
use divconq::{BigDigits, Point, PointPair, RecordedStep, StepRecorder};

mod console;
mod error;
mod interop;

use interop::{new_obj, point_arr, set_kv, str_arr};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console at `level`
/// ("error", "warn", "info", "debug", "trace" or "off").
#[wasm_bindgen]
pub fn init_logging(level: &str) -> JsValue {
    match console::parse_level(level) {
        Some(filter) => error::ok(JsValue::from_bool(console::install(filter))),
        None => error::invalid_input("level", format!("unknown log level '{}'", level)),
    }
}

// `traced` selects the tighter caps of the tracing and verifying entry points.
fn read_points(xs: &[f64], ys: &[f64], traced: bool) -> Result<Vec<Point>, JsValue> {
    if xs.len() != ys.len() {
        return Err(error::length_mismatch(xs.len(), ys.len()));
    }
    if !in_point_bounds(xs.len(), traced) {
        let max = if traced { MAX_TRACE_POINTS } else { MAX_POINTS };
        return Err(error::out_of_range("xs", 0.0, max as f64, xs.len() as f64));
    }
    Ok(xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect())
}

fn read_digits(param: &str, raw: &str, traced: bool) -> Result<BigDigits, JsValue> {
    let s = raw.trim();
    if !in_digit_bounds(s.len(), traced) {
        let max = if traced { MAX_TRACE_DIGITS } else { MAX_DIGITS };
        return Err(error::out_of_range(param, 0.0, max as f64, s.len() as f64));
    }
    s.parse::<BigDigits>().map_err(|e| error::from_core(param, &e))
}

fn pair_obj(pair: &PointPair) -> JsValue {
    let o = new_obj();
    set_kv(&o, "distance", &JsValue::from_f64(pair.distance()));
    set_kv(&o, "p1", &point_arr(pair.first()).into());
    set_kv(&o, "p2", &point_arr(pair.second()).into());
    o.into()
}

/// Closest pair of the points `(xs[i], ys[i])`.
///
/// Value: `{ distance, p1: Float64Array[x, y], p2: Float64Array[x, y] }`.
#[wasm_bindgen]
pub fn closest_pair(xs: &[f64], ys: &[f64]) -> JsValue {
    let points = match read_points(xs, ys, false) {
        Ok(p) => p,
        Err(e) => return e,
    };
    match divconq::closest_pair(&points) {
        Ok(pair) => error::ok(pair_obj(&pair)),
        Err(e) => error::from_core("points", &e),
    }
}

#[derive(Serialize)]
struct Traced<'a, T: Serialize> {
    result: T,
    steps: &'a [RecordedStep],
}

/// As [`closest_pair`], with the recursion trace.
///
/// Value: `{ result: { p1: {x, y}, p2: {x, y}, distance }, steps: [{ kind, depth, message }] }`.
#[wasm_bindgen]
pub fn closest_pair_traced(xs: &[f64], ys: &[f64]) -> JsValue {
    let points = match read_points(xs, ys, true) {
        Ok(p) => p,
        Err(e) => return e,
    };
    let mut recorder = StepRecorder::new();
    match divconq::closest_pair_with(&points, &mut recorder) {
        Ok(pair) => serde_wasm_bindgen::to_value(&Traced { result: pair, steps: recorder.steps() })
            .map_or_else(error::serialize, error::ok),
        Err(e) => error::from_core("points", &e),
    }
}

/// Product of two non-negative decimal strings. Surrounding whitespace is ignored.
///
/// Value: the product as a canonical decimal string.
#[wasm_bindgen]
pub fn multiply(a: &str, b: &str) -> JsValue {
    let (a, b) = match (read_digits("a", a, false), read_digits("b", b, false)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => return e,
    };
    error::ok(JsValue::from_str(&divconq::multiply(&a, &b).to_string()))
}

/// As [`multiply`], with the recursion trace.
///
/// Value: `{ result: "<product>", steps: [{ kind, depth, message }] }`.
#[wasm_bindgen]
pub fn multiply_traced(a: &str, b: &str) -> JsValue {
    let (a, b) = match (read_digits("a", a, true), read_digits("b", b, true)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => return e,
    };
    let mut recorder = StepRecorder::new();
    let product = divconq::multiply_with(&a, &b, &mut recorder);
    serde_wasm_bindgen::to_value(&Traced { result: product.to_string(), steps: recorder.steps() })
        .map_or_else(error::serialize, error::ok)
}

/// Multiplies and cross-checks against the schoolbook product.
///
/// Value: `{ product, digits, verified }`.
#[wasm_bindgen]
pub fn multiply_verified(a: &str, b: &str) -> JsValue {
    let (a, b) = match (read_digits("a", a, true), read_digits("b", b, true)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => return e,
    };
    let product = divconq::multiply(&a, &b);
    let verified = product == a.mul_schoolbook(&b);
    let o = new_obj();
    set_kv(&o, "product", &JsValue::from_str(&product.to_string()));
    set_kv(&o, "digits", &JsValue::from_f64(product.digit_len() as f64));
    set_kv(&o, "verified", &JsValue::from_bool(verified));
    error::ok(o.into())
}

/// Trace lines only, in emission order; handy for a plain text log view.
#[wasm_bindgen]
pub fn multiply_trace_lines(a: &str, b: &str) -> JsValue {
    let (a, b) = match (read_digits("a", a, true), read_digits("b", b, true)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => return e,
    };
    let mut recorder = StepRecorder::new();
    divconq::multiply_with(&a, &b, &mut recorder);
    error::ok(str_arr(recorder.lines()).into())
}
