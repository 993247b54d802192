use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Blank rows above the timer line on the test screen.
pub fn vertical_offset(height: u16) -> usize {
    (usize::from(height) / 2).saturating_sub(3)
}

/// A full-width band of `height` rows in the vertical middle of `area`.
pub fn middle_band(area: Rect, height: u16) -> Rect {
    let [band] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    band
}
