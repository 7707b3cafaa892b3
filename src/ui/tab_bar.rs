use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    draw,
    enums::{Align, Color, Event, Font},
    prelude::*,
    widget::Widget,
};

use crate::app::controllers::chrome::{self, TabChrome};
use crate::app::domain::geometry::{Point, Rect};
use crate::app::domain::messages::Message;

pub const TAB_BAR_HEIGHT: i32 = 28;

const TITLE_FONT_SIZE: i32 = 12;

struct TabBarState {
    chromes: Vec<TabChrome>,
    is_dark: bool,
    sender: Sender<Message>,
}

/// Custom-drawn tab strip. Holds a snapshot of the controller's tab chrome,
/// laid out relative to the widget's top-left corner.
pub struct TabBar {
    pub widget: Widget,
    state: Rc<RefCell<TabBarState>>,
}

impl TabBar {
    pub fn new(x: i32, y: i32, w: i32, sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(TabBarState {
            chromes: Vec::new(),
            is_dark: false,
            sender,
        }));

        let mut widget = Widget::new(x, y, w, TAB_BAR_HEIGHT, None);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_tab_bar(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_tab_bar(wid, event, &handle_state));

        Self { widget, state }
    }

    /// Origin to lay tabs out from; event coordinates are translated to match.
    pub fn layout_origin(&self) -> Point {
        Point::new(0, 0)
    }

    pub fn rebuild(&mut self, chromes: Vec<TabChrome>, is_dark: bool) {
        {
            let mut st = self.state.borrow_mut();
            st.chromes = chromes;
            st.is_dark = is_dark;
        }
        self.widget.redraw();
    }
}

/// Title width in pixels, as the tab bar will draw it.
pub fn measure_title(title: &str) -> i32 {
    draw::set_font(Font::Helvetica, TITLE_FONT_SIZE);
    let (w, _) = draw::measure(title, false);
    w
}

// --- Colors ---

struct ThemeColors {
    bar_bg: Color,
    active_bg: Color,
    inactive_bg: Color,
    text: Color,
    glyph: Color,
}

fn theme_colors(is_dark: bool) -> ThemeColors {
    if is_dark {
        ThemeColors {
            bar_bg: Color::from_rgb(25, 25, 25),
            active_bg: Color::from_rgb(50, 50, 50),
            inactive_bg: Color::from_rgb(35, 35, 35),
            text: Color::from_rgb(230, 230, 230),
            glyph: Color::from_rgb(200, 200, 200),
        }
    } else {
        ThemeColors {
            bar_bg: Color::from_rgb(200, 200, 200),
            active_bg: Color::from_rgb(255, 255, 255),
            inactive_bg: Color::from_rgb(220, 220, 220),
            text: Color::Black,
            glyph: Color::Black,
        }
    }
}

// --- Drawing ---

fn shifted(r: Rect, dx: i32, dy: i32) -> Rect {
    Rect::new(r.x + dx, r.y + dy, r.w, r.h)
}

fn draw_tab_bar(wid: &Widget, st: &TabBarState) {
    let (wx, wy) = (wid.x(), wid.y());
    let colors = theme_colors(st.is_dark);

    draw::set_draw_color(colors.bar_bg);
    draw::draw_rectf(wx, wy, wid.w(), wid.h());

    for tab in &st.chromes {
        draw_tab(tab, wx, wy, &colors);
    }
}

/// Title left-aligned in its box, then the close glyph: a box with both
/// diagonals. Every tab gets the same glyph; there is no hover state.
fn draw_tab(tab: &TabChrome, dx: i32, dy: i32, colors: &ThemeColors) {
    let bounds = shifted(tab.bounds, dx, dy);
    let bg = if tab.is_active { colors.active_bg } else { colors.inactive_bg };
    draw::set_draw_color(bg);
    draw::draw_rectf(bounds.x, bounds.y, bounds.w, bounds.h);

    let title_box = shifted(tab.title_box, dx, dy);
    draw::set_draw_color(colors.text);
    draw::set_font(Font::Helvetica, TITLE_FONT_SIZE);
    draw::push_clip(title_box.x, title_box.y, title_box.w, title_box.h);
    draw::draw_text2(
        &tab.title,
        title_box.x,
        title_box.y,
        title_box.w,
        title_box.h,
        Align::Left | Align::Inside,
    );
    draw::pop_clip();

    let glyph = shifted(tab.close_button, dx, dy);
    draw::set_draw_color(colors.glyph);
    draw::draw_rect(glyph.x, glyph.y, glyph.w, glyph.h);
    for (from, to) in tab.close_strokes {
        draw::draw_line(from.x + dx, from.y + dy, to.x + dx, to.y + dy);
    }
}

// --- Event handling ---

fn handle_tab_bar(wid: &mut Widget, event: Event, state: &Rc<RefCell<TabBarState>>) -> bool {
    match event {
        Event::Push => {
            let st = state.borrow();
            let x = app::event_x() - wid.x();
            let y = app::event_y() - wid.y();
            match app::event_button() {
                1 => {
                    st.sender.send(Message::TabStripClick { x, y });
                    true
                }
                2 => {
                    // Middle click closes the tab under the pointer
                    let rects: Vec<Rect> = st.chromes.iter().map(|c| c.bounds).collect();
                    if let Some(index) = chrome::hit_test_tab(&rects, Point::new(x, y)) {
                        st.sender.send(Message::TabClose(st.chromes[index].id));
                    }
                    true
                }
                _ => false,
            }
        }
        _ => false,
    }
}
