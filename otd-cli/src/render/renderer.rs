use super::theme::Sepia;
use otd_core::Anniversary;
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Sepia::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: otd_core::dates::DISPLAY_DATE_FORMAT.to_string(),
                    use_color: true,
                },
            },
        }
    }

    /// Framed status message. Only shown with colors on, so redirected
    /// output contains nothing but anniversary lines.
    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        }
    }

    pub fn print_anniversary(&self, anniversary: &Anniversary) {
        println!("{}", self.anniversary_line(anniversary));
    }

    pub fn print_anniversaries(&self, anniversaries: &[Anniversary]) {
        for anniversary in anniversaries {
            self.print_anniversary(anniversary);
        }
    }

    fn anniversary_line(&self, anniversary: &Anniversary) -> String {
        if !self.opts.use_color {
            return anniversary.line(&self.opts.date_format);
        }
        let text = anniversary.text.as_str().with(Sepia::GOLD).bold();
        let date = anniversary
            .start
            .format(&self.opts.date_format)
            .to_string()
            .with(Sepia::OLIVE);
        let ago = format!("{} years ago", anniversary.years_ago).with(Sepia::MUTED);
        format!("On this day in history: {text} ({date}, {ago})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn graduated() -> Anniversary {
        Anniversary {
            text: "Graduated".to_string(),
            start: NaiveDate::from_ymd_opt(1990, 6, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            years_ago: 36,
        }
    }

    #[test]
    fn plain_line_is_exact() {
        let renderer = Renderer::new(Some(RenderOptions {
            date_format: "%B %-d, %Y".to_string(),
            use_color: false,
        }));
        assert_eq!(
            renderer.anniversary_line(&graduated()),
            "On this day in history: Graduated (June 15, 1990, 36 years ago)"
        );
    }

    #[test]
    fn colored_line_keeps_the_content() {
        let renderer = Renderer::new(None);
        let line = renderer.anniversary_line(&graduated());
        assert!(line.starts_with("On this day in history: "));
        assert!(line.contains("Graduated"));
        assert!(line.contains("June 15, 1990"));
        assert!(line.contains("36 years ago"));
        assert!(line.contains('\u{1b}'));
    }
}
