/// User-facing error output
///
/// Every failure in the pipeline collapses to a single printed line with a
/// colored "error" prefix; callers cannot distinguish causes from the
/// output alone.

use std::io::Write;

/// Print colored text to terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    // Not a terminal (or no terminfo): report false so the caller prints plain
    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        match term::stdout() {
            Some(mut t) => {
                if t.fg(fg).is_err() {
                    return false;
                }
                let _ = t.attr(term::Attr::Bold);
                if write!(t, "{}", s).is_err() {
                    return false;
                }
                let _ = t.reset();
                true
            }
            None => false,
        }
    }
}

/// Print an error message as one line with a colored "error" prefix
pub fn print_error(msg: &str) {
    print_color("error", term::color::BRIGHT_RED);
    println!(": {}", msg);
}
