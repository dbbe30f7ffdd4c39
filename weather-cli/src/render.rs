//! Terminal render surface.

use std::io::{self, Write};

use weather_core::{LookupError, RenderedView};

/// Write the weather fields, skipping the empty ones.
pub fn write_view(out: &mut impl Write, view: &RenderedView) -> io::Result<()> {
    if let Some(error) = &view.error {
        writeln!(out, "{error}")?;
        return Ok(());
    }
    if view.is_blank() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", view.city_line)?;
    if view.emoji.is_empty() {
        writeln!(out, "{}", view.temperature_line)?;
    } else {
        writeln!(out, "{}  {}", view.emoji, view.temperature_line)?;
    }
    writeln!(out, "{}", view.feels_like_line)?;
    writeln!(out, "{}", view.description)?;
    writeln!(out)?;
    writeln!(out, "{}", view.humidity_line)?;
    writeln!(out, "{}", view.wind_line)?;
    writeln!(out)?;
    Ok(())
}

pub fn print_view(view: &RenderedView) -> io::Result<()> {
    write_view(&mut io::stdout().lock(), view)
}

pub fn print_error(err: &LookupError) -> io::Result<()> {
    let mut err_out = io::stderr().lock();
    writeln!(err_out, "{}", err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(view: &RenderedView) -> String {
        let mut buf = Vec::new();
        write_view(&mut buf, view).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_all_fields() {
        let view = RenderedView {
            city_line: "London, GB".into(),
            temperature_line: "50°F".into(),
            feels_like_line: "Feels like 48°F".into(),
            emoji: "🌧".into(),
            description: "light rain".into(),
            humidity_line: "💧 Humidity: 81%".into(),
            wind_line: "💨 Wind: 14.8 km/h".into(),
            error: None,
        };

        let text = render(&view);
        assert!(text.contains("London, GB"));
        assert!(text.contains("🌧  50°F"));
        assert!(text.contains("Feels like 48°F"));
        assert!(text.contains("💨 Wind: 14.8 km/h"));
    }

    #[test]
    fn error_replaces_fields() {
        let view = RenderedView {
            error: Some("Not found:\nCity not found".into()),
            ..RenderedView::default()
        };
        assert_eq!(render(&view), "Not found:\nCity not found\n");
    }

    #[test]
    fn blank_view_writes_nothing() {
        assert_eq!(render(&RenderedView::default()), "");
    }
}
