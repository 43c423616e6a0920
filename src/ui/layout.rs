use ratatui::layout::{Constraint, Flex, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Split the screen into header, body and footer. The header wins on screens
/// too short for all three.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_h = area.height.min(HEADER_HEIGHT);
    let footer_h = FOOTER_HEIGHT.min(area.height - header_h);
    let body_h = area.height - header_h - footer_h;
    let row = |y: u16, height: u16| Rect { y, height, ..area };
    (
        row(area.y, header_h),
        row(area.y + header_h, body_h),
        row(area.y + header_h + body_h, footer_h),
    )
}

/// A box of the given percentage size in the middle of `area`, for dialogs.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Split `area` into a one-line status row on top and the rest.
pub fn status_and_content(area: Rect) -> (Rect, Rect) {
    let [status, content] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    (status, content)
}
