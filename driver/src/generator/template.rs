use soundcore::prelude::INPUT_SEPARATOR;

pub const LINE_ENDING: &str = "\r\n";

/// `hh:mm:ss` for a number of seconds since midnight.
pub fn clock_time(seconds: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}

/// `H M S` elapsed time as written by the sounder.
pub fn elapsed_time(seconds: u32) -> String {
    format!("{} {} {}", seconds / 3600, (seconds / 60) % 60, seconds % 60)
}

pub fn coordinate_line(seconds: u32, x: f64, y: f64) -> String {
    [clock_time(seconds), format!("{:.3}", x), format!("{:.3}", y)].join(INPUT_SEPARATOR)
}

pub fn depth_line(id: usize, elapsed_seconds: u32, height: f64) -> String {
    [
        id.to_string(),
        elapsed_time(elapsed_seconds),
        format!("{:.2}", height),
    ]
    .join(INPUT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_use_the_input_layout() {
        assert_eq!(clock_time(8 * 3600 + 15 * 60 + 7), "08:15:07");
        assert_eq!(elapsed_time(3725), "1 2 5");
        assert_eq!(coordinate_line(5, 1.0, 2.5), "00:00:05   1.000   2.500");
        assert_eq!(depth_line(3, 61, 4.256), "3   0 1 1   4.26");
    }
}
