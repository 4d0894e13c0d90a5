//! Text rendering for the command-line driver.

use crate::evaluator::classify;

/// Sample hands shown when the binary runs without arguments, including the
/// ten alias, a near-flush and two duplicate-card rejections.
pub const DEMO_HANDS: [&str; 12] = [
    "Ah Kh Qh Jh Th",
    "4s 5s 6s 7s 8s",
    "9h 9s 9d 9c 2h",
    "2h 2d 2c 4s 4h",
    "2h 5d 8d Jd Kd",
    "4h 5s 6d 7c 8h",
    "Th Ts Td 4c 2h",
    "4h 4s 7d 7c 2h",
    "6h 6s 3d 8c 2h",
    "Ah Kd 10d 5c 2h",
    "6h 6h 6d 6s 6c",
    "4d 4d 5c 2h 8s",
];

/// Shown for any validation failure, whatever its kind.
pub const INVALID_HAND: &str = "Invalid Hand";

/// `"{hand text as given} => {category or Invalid Hand}"`.
///
/// ```
/// use poker_classify::report::render_line;
///
/// assert_eq!(render_line("Ah Kd 10d 5c 2h"), "Ah Kd 10d 5c 2h => High Card: A");
/// assert_eq!(render_line("4d 4d 5c 2h 8s"), "4d 4d 5c 2h 8s => Invalid Hand");
/// ```
pub fn render_line(raw: &str) -> String {
    match classify(raw) {
        Ok(category) => format!("{raw} => {category}"),
        Err(_) => format!("{raw} => {INVALID_HAND}"),
    }
}
