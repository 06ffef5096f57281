//! Greeting, clock and calendar card contents

use chrono::{Local, Timelike};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::card::card_block;

pub fn render_hi_card(frame: &mut Frame, area: Rect) {
    let block = card_block(frame, area, "Hi");
    let greeting = greeting_for_hour(Local::now().hour());
    let paragraph = Paragraph::new(greeting)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(block);
    frame.render_widget(paragraph, area);
}

pub fn render_clock_card(frame: &mut Frame, area: Rect) {
    let block = card_block(frame, area, "Clock");
    let now = Local::now().format("%H:%M:%S").to_string();
    let paragraph = Paragraph::new(now)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .centered()
        .block(block);
    frame.render_widget(paragraph, area);
}

pub fn render_calendar_card(frame: &mut Frame, area: Rect) {
    let block = card_block(frame, area, "Calendar");
    let today = Local::now().format("%A, %B %-d").to_string();
    let paragraph = Paragraph::new(today)
        .style(Style::default().fg(Color::White))
        .centered()
        .block(block);
    frame.render_widget(paragraph, area);
}

fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning ☀",
        12..=17 => "Good afternoon",
        18..=22 => "Good evening",
        _ => "Good night ☾",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_covers_the_whole_day() {
        assert_eq!(greeting_for_hour(6), "Good morning ☀");
        assert_eq!(greeting_for_hour(13), "Good afternoon");
        assert_eq!(greeting_for_hour(20), "Good evening");
        assert_eq!(greeting_for_hour(2), "Good night ☾");
        assert_eq!(greeting_for_hour(23), "Good night ☾");
    }
}
