//! Circle area and circumference from an optional radius argument.
//!
//! Takes the first argument as the radius in centimeters and falls back
//! to 42 when it is missing or not a number.

use std::env;
use std::f64::consts::PI;

fn main() {
    let radius = env::args()
        .nth(1)
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(42.0);
    println!("Circle");
    println!("  Radius       ={radius:6.2}cm");
    println!("  Area         ={:6.2}cm²", PI * radius.powi(2));
    println!("  Circumference={:6.2}cm", 2.0 * PI * radius);
}
