use std::io::{self, Write};

/// Receives page-level lifecycle events during a run. Methods default to
/// no-ops so sinks implement only what they render.
pub trait Progress {
    fn begin(&mut self, _total: usize) {}
    fn page_done(&mut self, _done: usize, _total: usize) {}
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;

impl Progress for NullProgress {}

const BAR_WIDTH: usize = 40;

/// Renders a single in-place progress line on stdout, rewritten after every
/// page.
pub struct ConsoleProgress {
    width: usize,
    started: bool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        ConsoleProgress {
            width: BAR_WIDTH,
            started: false,
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        ConsoleProgress::new()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.started = total > 0;
    }

    fn page_done(&mut self, done: usize, total: usize) {
        if !self.started || total == 0 {
            return;
        }
        print!("\r{}", render_bar(done, total, self.width));
        let _ = io::stdout().flush();
    }

    fn finish(&mut self) {
        if self.started {
            println!();
            self.started = false;
        }
    }
}

/// Bar line for `done` of `total` pages, e.g.
/// `Progress: |████----| 50.00% (2/4)`.
fn render_bar(done: usize, total: usize, width: usize) -> String {
    let fraction = done as f64 / total as f64;
    let filled = ((width as f64 * fraction) as usize).min(width);
    format!(
        "Progress: |{}{}| {:6.2}% ({}/{})",
        "\u{2588}".repeat(filled),
        "-".repeat(width - filled),
        fraction * 100.0,
        done,
        total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bar_at_zero_pages_done() {
        assert_eq!(render_bar(0, 5, 4), "Progress: |----|   0.00% (0/5)");
    }

    #[test]
    fn half_full_bar_at_the_midpoint() {
        assert_eq!(
            render_bar(2, 4, 4),
            "Progress: |\u{2588}\u{2588}--|  50.00% (2/4)"
        );
    }

    #[test]
    fn full_bar_when_all_pages_done() {
        assert_eq!(
            render_bar(5, 5, 4),
            "Progress: |\u{2588}\u{2588}\u{2588}\u{2588}| 100.00% (5/5)"
        );
    }
}
