use std::path::Path;

use crate::app::controllers::chrome::{self, TabChrome};
use crate::app::controllers::registry::DocumentRegistry;
use crate::app::domain::content::TextContent;
use crate::app::domain::document::DocumentId;
use crate::app::domain::geometry::{Point, Rect};
use crate::app::domain::messages::{EditCommand, Message};
use crate::app::domain::zoom::{self, ZOOM_STEP, Zoom};
use crate::app::infrastructure::dialogs::{Dialogs, SaveChoice};
use crate::app::infrastructure::error::AppError;
use crate::app::services::file_io::{read_text_file, write_text_file};
use crate::app::services::help;
use crate::app::services::text_ops::extract_filename;

pub const UNTITLED_TITLE: &str = "Untitled";

/// What the UI has to do after a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Forward to the editor widget bound to the active tab.
    Edit(EditCommand),
    Quit,
}

/// Owns the open tabs and runs every tab/file operation.
///
/// All user interaction goes through the `Dialogs` passed into each call, so
/// the controller itself never touches a widget.
pub struct TabStripController<B> {
    registry: DocumentRegistry<B>,
    tab_rects: Vec<Rect>,
    keep_tab_on_failed_save: bool,
}

impl<B: TextContent> Default for TabStripController<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TextContent> TabStripController<B> {
    pub fn new() -> Self {
        Self {
            registry: DocumentRegistry::new(),
            tab_rects: Vec::new(),
            keep_tab_on_failed_save: false,
        }
    }

    pub fn set_keep_tab_on_failed_save(&mut self, keep: bool) {
        self.keep_tab_on_failed_save = keep;
    }

    pub fn registry(&self) -> &DocumentRegistry<B> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut DocumentRegistry<B> {
        &mut self.registry
    }

    // --- Dispatch ---

    pub fn handle(&mut self, msg: Message, dialogs: &mut dyn Dialogs) -> Outcome {
        match msg {
            Message::FileNew => {
                self.open_new_tab(UNTITLED_TITLE);
            }
            Message::FileOpen => {
                if let Some(path) = dialogs.pick_open_path() {
                    self.open_file(&path, dialogs);
                }
            }
            Message::FileSave => {
                self.save_active(dialogs);
            }
            Message::FileSaveAs => {
                self.save_active_as(dialogs);
            }
            Message::FileQuit | Message::WindowClose => {
                if self.exit_application(dialogs) {
                    return Outcome::Quit;
                }
            }
            Message::Edit(cmd) => {
                if self.registry.active_id().is_some() {
                    return Outcome::Edit(cmd);
                }
            }
            Message::ZoomIn => {
                self.change_zoom(ZOOM_STEP);
            }
            Message::ZoomOut => {
                self.change_zoom(-ZOOM_STEP);
            }
            Message::ZoomWheel(notches) => {
                self.change_zoom(zoom::wheel_delta(notches));
            }
            Message::TabStripClick { x, y } => {
                self.click(Point::new(x, y), dialogs);
            }
            Message::TabClose(id) => {
                self.close_document(id, dialogs);
            }
            Message::TabCloseActive => {
                if let Some(id) = self.registry.active_id() {
                    self.close_document(id, dialogs);
                }
            }
            Message::TabNext => {
                if let Some(id) = self.registry.next_id_after_active() {
                    self.registry.set_active(id);
                }
            }
            Message::TabPrevious => {
                if let Some(id) = self.registry.prev_id_before_active() {
                    self.registry.set_active(id);
                }
            }
            Message::BufferModified(id) => {
                self.mark_modified(id);
            }
            Message::FilesDropped(paths) => {
                self.open_dropped(&paths, dialogs);
            }
            Message::ShowHelp => {
                if let Err(e) = help::open_help() {
                    report(dialogs, &e);
                }
            }
        }
        Outcome::Continue
    }

    // --- Tab lifecycle ---

    pub fn open_new_tab(&mut self, title: &str) -> DocumentId {
        let id = self.registry.insert(title, None, "");
        log::info!("Opened new tab {:?} \"{}\"", id, title);
        id
    }

    /// Read `path` and open it in a new tab. No tab is created when the
    /// read fails.
    pub fn open_file(&mut self, path: &str, dialogs: &mut dyn Dialogs) -> Option<DocumentId> {
        match read_text_file(path) {
            Ok(text) => {
                let id = self
                    .registry
                    .insert(&extract_filename(path), Some(path.to_string()), &text);
                log::info!("Opened {} as {:?}", path, id);
                Some(id)
            }
            Err(e) => {
                report(dialogs, &e);
                None
            }
        }
    }

    /// Open every dropped path that is an existing file; anything else is
    /// skipped without a message.
    pub fn open_dropped(&mut self, paths: &[String], dialogs: &mut dyn Dialogs) -> Vec<DocumentId> {
        paths
            .iter()
            .filter(|p| {
                let exists = Path::new(p.as_str()).is_file();
                if !exists {
                    log::debug!("Skipping dropped entry {}", p);
                }
                exists
            })
            .filter_map(|p| self.open_file(p, dialogs))
            .collect()
    }

    pub fn select_tab(&mut self, index: usize) -> bool {
        match self.registry.id_at(index) {
            Some(id) => self.registry.set_active(id),
            None => false,
        }
    }

    /// Returns true when the tab was closed.
    pub fn close_tab(&mut self, index: usize, dialogs: &mut dyn Dialogs) -> bool {
        match self.registry.id_at(index) {
            Some(id) => self.close_document(id, dialogs),
            None => false,
        }
    }

    pub fn close_document(&mut self, id: DocumentId, dialogs: &mut dyn Dialogs) -> bool {
        let was_active = self.registry.active_id();
        if !self.resolve_unsaved(id, dialogs) {
            return false;
        }
        if !self.registry.remove(id) {
            return false;
        }
        if let Some(prev) = was_active
            && prev != id
        {
            self.registry.set_active(prev);
        }
        log::info!("Closed tab {:?}", id);
        true
    }

    /// Walk every tab in order and settle unsaved changes. Returns true when
    /// the application may terminate; any Cancel stops the walk.
    pub fn exit_application(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        for id in self.registry.ids() {
            if !self.resolve_unsaved(id, dialogs) {
                log::info!("Exit cancelled");
                return false;
            }
        }
        log::info!("Exiting with {} tab(s) open", self.registry.count());
        true
    }

    /// Ask about unsaved changes in `id`, saving if requested. Returns false
    /// when the caller must stop (Cancel, or a failed save with
    /// `keep_tab_on_failed_save`).
    fn resolve_unsaved(&mut self, id: DocumentId, dialogs: &mut dyn Dialogs) -> bool {
        let name = match self.registry.get(id) {
            Some(tab) if tab.document.is_modified() => tab.name.clone(),
            _ => return true,
        };
        match dialogs.confirm_save(&name) {
            SaveChoice::Save => {
                self.registry.set_active(id);
                let saved = self.save_tab(id, dialogs);
                if !saved {
                    log::warn!("Save of \"{}\" did not complete", name);
                }
                saved || !self.keep_tab_on_failed_save
            }
            SaveChoice::Discard => {
                log::info!("Discarding changes to \"{}\"", name);
                true
            }
            SaveChoice::Cancel => false,
        }
    }

    // --- Modified state ---

    /// Record a text change. Returns true when the title gained its marker.
    pub fn mark_modified(&mut self, id: DocumentId) -> bool {
        self.registry
            .get_mut(id)
            .is_some_and(|tab| tab.document.mark_modified())
    }

    // --- Saving ---

    pub fn save_active(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        match self.registry.active_id() {
            Some(id) => self.save_tab(id, dialogs),
            None => false,
        }
    }

    pub fn save_active_as(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        match self.registry.active_id() {
            Some(id) => self.save_tab_as(id, dialogs),
            None => false,
        }
    }

    fn save_tab(&mut self, id: DocumentId, dialogs: &mut dyn Dialogs) -> bool {
        let Some(tab) = self.registry.get(id) else {
            return false;
        };
        match tab.document.file_path() {
            Some(path) => {
                let path = path.to_string();
                self.write_tab(id, &path, dialogs)
            }
            None => self.save_tab_as(id, dialogs),
        }
    }

    fn save_tab_as(&mut self, id: DocumentId, dialogs: &mut dyn Dialogs) -> bool {
        if self.registry.get(id).is_none() {
            return false;
        }
        let Some(path) = dialogs.pick_save_path() else {
            return false;
        };
        if let Some(tab) = self.registry.get_mut(id) {
            tab.document.set_file_path(path.clone());
            tab.name = extract_filename(&path);
        }
        self.write_tab(id, &path, dialogs)
    }

    fn write_tab(&mut self, id: DocumentId, path: &str, dialogs: &mut dyn Dialogs) -> bool {
        let Some(tab) = self.registry.get_mut(id) else {
            return false;
        };
        match write_text_file(path, &tab.content.text()) {
            Ok(()) => {
                tab.document.mark_saved(None);
                log::info!("Saved {:?} to {}", id, path);
                true
            }
            Err(e) => {
                report(dialogs, &e);
                false
            }
        }
    }

    // --- Zoom ---

    /// Adjust the active tab's zoom by `delta`, clamped to the allowed range.
    pub fn change_zoom(&mut self, delta: f32) -> Option<Zoom> {
        let tab = self.registry.active_mut()?;
        tab.zoom = tab.zoom.adjusted(delta);
        log::debug!("Zoom for {:?} is now {:.2}", tab.id(), tab.zoom.factor());
        Some(tab.zoom)
    }

    // --- Tab strip geometry ---

    /// Recompute tab rectangles from the current titles.
    pub fn relayout<F>(&mut self, origin: Point, height: i32, measure: F)
    where
        F: Fn(&str) -> i32,
    {
        let widths: Vec<i32> = self.registry.tabs().iter().map(|t| measure(&t.title())).collect();
        self.tab_rects = chrome::layout_tabs(widths, origin, height);
    }

    pub fn tab_rects(&self) -> &[Rect] {
        &self.tab_rects
    }

    /// Index of the tab whose close glyph contains `p`, from the last layout.
    pub fn hit_test_close_button(&self, p: Point) -> Option<usize> {
        let count = self.registry.count().min(self.tab_rects.len());
        chrome::hit_test_close_button(&self.tab_rects[..count], p)
    }

    /// Drawing description for one tab, from the last layout.
    pub fn tab_chrome(&self, index: usize) -> Option<TabChrome> {
        let tab = self.registry.tabs().get(index)?;
        let bounds = *self.tab_rects.get(index)?;
        let is_active = self.registry.active_id() == Some(tab.id());
        Some(TabChrome::new(index, tab.id(), tab.title(), is_active, bounds))
    }

    pub fn tab_chromes(&self) -> Vec<TabChrome> {
        (0..self.registry.count()).filter_map(|i| self.tab_chrome(i)).collect()
    }

    /// Pointer press on the strip: close glyphs win over tab bodies.
    pub fn click(&mut self, p: Point, dialogs: &mut dyn Dialogs) {
        if let Some(index) = self.hit_test_close_button(p) {
            log::debug!("Close glyph hit on tab {}", index);
            self.close_tab(index, dialogs);
            return;
        }
        let count = self.registry.count().min(self.tab_rects.len());
        if let Some(index) = chrome::hit_test_tab(&self.tab_rects[..count], p) {
            self.select_tab(index);
        }
    }
}

fn report(dialogs: &mut dyn Dialogs, err: &AppError) {
    log::warn!("{}", err);
    dialogs.report_error(&err.to_string());
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::app::domain::zoom::{MAX_ZOOM, MIN_ZOOM};

    /// Replays queued answers; records every prompt and error.
    #[derive(Default)]
    struct ScriptedDialogs {
        pub open_paths: VecDeque<Option<String>>,
        pub save_paths: VecDeque<Option<String>>,
        pub choices: VecDeque<SaveChoice>,
        pub prompts: Vec<String>,
        pub errors: Vec<String>,
    }

    impl Dialogs for ScriptedDialogs {
        fn pick_open_path(&mut self) -> Option<String> {
            self.open_paths.pop_front().flatten()
        }

        fn pick_save_path(&mut self) -> Option<String> {
            self.save_paths.pop_front().flatten()
        }

        fn confirm_save(&mut self, name: &str) -> SaveChoice {
            self.prompts.push(name.to_string());
            self.choices.pop_front().unwrap_or(SaveChoice::Cancel)
        }

        fn report_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    fn type_text(ctl: &mut TabStripController<String>, id: DocumentId, text: &str) {
        ctl.registry_mut().get_mut(id).unwrap().content.push_str(text);
        ctl.mark_modified(id);
    }

    fn path_in(dir: &tempfile::TempDir, name: &str) -> String {
        dir.path().join(name).to_str().unwrap().to_string()
    }

    #[test]
    fn test_new_tab_typed_then_saved_as() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();

        let id = ctl.open_new_tab(UNTITLED_TITLE);
        assert_eq!(ctl.registry().get(id).unwrap().title(), "Untitled");

        type_text(&mut ctl, id, "hi");
        assert_eq!(ctl.registry().get(id).unwrap().title(), "Untitled*");

        let target = path_in(&dir, "a.txt");
        dialogs.save_paths.push_back(Some(target.clone()));
        assert!(ctl.save_active_as(&mut dialogs));

        let tab = ctl.registry().get(id).unwrap();
        assert_eq!(tab.title(), "a.txt");
        assert!(!tab.document.is_modified());
        assert_eq!(tab.document.file_path(), Some(target.as_str()));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "hi");
    }

    #[test]
    fn test_save_without_path_delegates_to_save_as() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let id = ctl.open_new_tab(UNTITLED_TITLE);
        type_text(&mut ctl, id, "x");

        dialogs.save_paths.push_back(None);
        assert!(!ctl.save_active(&mut dialogs));
        assert!(ctl.registry().get(id).unwrap().document.is_modified());

        let target = path_in(&dir, "b.txt");
        dialogs.save_paths.push_back(Some(target.clone()));
        assert!(ctl.save_active(&mut dialogs));
        assert_eq!(ctl.registry().get(id).unwrap().title(), "b.txt");
    }

    #[test]
    fn test_save_existing_path_writes_and_cleans() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_in(&dir, "c.txt");
        std::fs::write(&path, "old").unwrap();

        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let id = ctl.open_file(&path, &mut dialogs).unwrap();
        assert_eq!(ctl.registry().get(id).unwrap().content, "old");

        type_text(&mut ctl, id, "er");
        assert_eq!(ctl.registry().get(id).unwrap().title(), "c.txt*");
        assert!(ctl.save_active(&mut dialogs));
        assert_eq!(ctl.registry().get(id).unwrap().title(), "c.txt");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "older");
        assert!(dialogs.errors.is_empty());
    }

    #[test]
    fn test_write_failure_keeps_tab_modified() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let id = ctl.open_new_tab(UNTITLED_TITLE);
        type_text(&mut ctl, id, "data");

        let bad = dir.path().join("missing-dir").join("d.txt");
        dialogs.save_paths.push_back(Some(bad.to_str().unwrap().to_string()));
        assert!(!ctl.save_active_as(&mut dialogs));

        let tab = ctl.registry().get(id).unwrap();
        assert!(tab.document.is_modified());
        assert_eq!(tab.title(), "d.txt*");
        assert_eq!(dialogs.errors.len(), 1);
    }

    #[test]
    fn test_open_failure_creates_no_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();

        assert!(ctl.open_file(&path_in(&dir, "nope.txt"), &mut dialogs).is_none());
        assert!(ctl.registry().is_empty());
        assert_eq!(dialogs.errors.len(), 1);
    }

    #[test]
    fn test_dropped_files_skip_missing_silently() {
        let dir = tempfile::tempdir().unwrap();
        let good = path_in(&dir, "good.txt");
        std::fs::write(&good, "g").unwrap();

        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let opened = ctl.open_dropped(
            &[path_in(&dir, "ghost.txt"), good.clone(), dir.path().to_str().unwrap().to_string()],
            &mut dialogs,
        );

        assert_eq!(opened.len(), 1);
        assert_eq!(ctl.registry().count(), 1);
        assert_eq!(ctl.registry().active_id(), Some(opened[0]));
        assert_eq!(ctl.registry().tabs()[0].title(), "good.txt");
        assert!(dialogs.errors.is_empty());
    }

    // A regular file whose reads fail with EIO at offset 0.
    #[cfg(target_os = "linux")]
    #[test]
    fn test_dropped_unreadable_file_reports_and_creates_no_tab() {
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let opened = ctl.open_dropped(&["/proc/self/mem".to_string()], &mut dialogs);

        assert!(opened.is_empty());
        assert!(ctl.registry().is_empty());
        assert_eq!(dialogs.errors.len(), 1);
        assert!(dialogs.errors[0].starts_with("Error opening file"));
    }

    #[test]
    fn test_close_discard_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_in(&dir, "b.txt");
        std::fs::write(&path, "hello").unwrap();

        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let id = ctl.open_file(&path, &mut dialogs).unwrap();
        type_text(&mut ctl, id, "!");

        dialogs.choices.push_back(SaveChoice::Discard);
        assert!(ctl.close_tab(0, &mut dialogs));
        assert!(ctl.registry().is_empty());
        assert_eq!(dialogs.prompts, vec!["b.txt"]);

        let reopened = ctl.open_file(&path, &mut dialogs).unwrap();
        assert_eq!(ctl.registry().get(reopened).unwrap().content, "hello");
    }

    #[test]
    fn test_close_cancel_keeps_tab() {
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let id = ctl.open_new_tab(UNTITLED_TITLE);
        type_text(&mut ctl, id, "x");

        dialogs.choices.push_back(SaveChoice::Cancel);
        assert!(!ctl.close_tab(0, &mut dialogs));
        assert_eq!(ctl.registry().count(), 1);
        assert!(ctl.registry().get(id).unwrap().document.is_modified());
    }

    #[test]
    fn test_close_clean_tab_does_not_prompt() {
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        ctl.open_new_tab("one");
        let two = ctl.open_new_tab("two");

        assert!(ctl.close_tab(0, &mut dialogs));
        assert!(dialogs.prompts.is_empty());
        assert_eq!(ctl.registry().active_id(), Some(two));
    }

    #[test]
    fn test_close_save_writes_the_closing_tab() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_in(&dir, "first.txt");
        std::fs::write(&path, "a").unwrap();

        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let first = ctl.open_file(&path, &mut dialogs).unwrap();
        type_text(&mut ctl, first, "b");
        let second = ctl.open_new_tab("other");

        dialogs.choices.push_back(SaveChoice::Save);
        assert!(ctl.close_document(first, &mut dialogs));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ab");
        assert_eq!(ctl.registry().active_id(), Some(second));
    }

    #[test]
    fn test_close_save_failure_still_closes_by_default() {
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let id = ctl.open_new_tab(UNTITLED_TITLE);
        type_text(&mut ctl, id, "x");

        dialogs.choices.push_back(SaveChoice::Save);
        dialogs.save_paths.push_back(None);
        assert!(ctl.close_tab(0, &mut dialogs));
        assert!(ctl.registry().is_empty());
    }

    #[test]
    fn test_close_save_failure_keeps_tab_when_configured() {
        let mut ctl = TabStripController::<String>::new();
        ctl.set_keep_tab_on_failed_save(true);
        let mut dialogs = ScriptedDialogs::default();
        let id = ctl.open_new_tab(UNTITLED_TITLE);
        type_text(&mut ctl, id, "x");

        dialogs.choices.push_back(SaveChoice::Save);
        dialogs.save_paths.push_back(None);
        assert!(!ctl.close_tab(0, &mut dialogs));
        assert_eq!(ctl.registry().count(), 1);
    }

    #[test]
    fn test_exit_cancel_on_second_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_in(&dir, "one.txt");
        std::fs::write(&path, "1").unwrap();

        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let first = ctl.open_file(&path, &mut dialogs).unwrap();
        let second = ctl.open_new_tab(UNTITLED_TITLE);
        type_text(&mut ctl, first, "1");
        type_text(&mut ctl, second, "2");

        dialogs.choices.extend([SaveChoice::Save, SaveChoice::Cancel]);
        assert!(!ctl.exit_application(&mut dialogs));

        assert_eq!(ctl.registry().count(), 2);
        assert_eq!(dialogs.prompts, vec!["one.txt", "Untitled"]);
        assert!(!ctl.registry().get(first).unwrap().document.is_modified());
        assert!(ctl.registry().get(second).unwrap().document.is_modified());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "11");
    }

    #[test]
    fn test_exit_discard_all_quits() {
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let a = ctl.open_new_tab("a");
        ctl.open_new_tab("clean");
        let c = ctl.open_new_tab("c");
        type_text(&mut ctl, a, "1");
        type_text(&mut ctl, c, "3");

        dialogs.choices.extend([SaveChoice::Discard, SaveChoice::Discard]);
        assert_eq!(ctl.handle(Message::FileQuit, &mut dialogs), Outcome::Quit);
        assert_eq!(dialogs.prompts, vec!["a", "c"]);
    }

    #[test]
    fn test_zoom_is_per_tab_and_clamped() {
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        assert!(ctl.change_zoom(ZOOM_STEP).is_none());

        let a = ctl.open_new_tab("a");
        for _ in 0..100 {
            ctl.handle(Message::ZoomIn, &mut dialogs);
        }
        assert_eq!(ctl.registry().get(a).unwrap().zoom.factor(), MAX_ZOOM);

        let b = ctl.open_new_tab("b");
        for _ in 0..100 {
            ctl.handle(Message::ZoomWheel(-120), &mut dialogs);
        }
        assert_eq!(ctl.registry().get(b).unwrap().zoom.factor(), MIN_ZOOM);
        assert_eq!(ctl.registry().get(a).unwrap().zoom.factor(), MAX_ZOOM);
    }

    #[test]
    fn test_click_routes_to_close_or_select() {
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let a = ctl.open_new_tab("a");
        let b = ctl.open_new_tab("b");
        ctl.relayout(Point::new(0, 30), 25, |t| t.len() as i32 * 7);

        let body = ctl.tab_rects()[0];
        ctl.click(Point::new(body.x + 3, body.y + 3), &mut dialogs);
        assert_eq!(ctl.registry().active_id(), Some(a));

        let glyph = ctl.tab_chrome(1).unwrap().close_button;
        assert_eq!(ctl.hit_test_close_button(Point::new(glyph.x + 7, glyph.y + 7)), Some(1));
        ctl.handle(Message::TabStripClick { x: glyph.x + 7, y: glyph.y + 7 }, &mut dialogs);
        assert!(ctl.registry().get(b).is_none());
        assert_eq!(ctl.registry().active_id(), Some(a));
    }

    #[test]
    fn test_chrome_reflects_marker_and_active() {
        let mut ctl = TabStripController::<String>::new();
        let a = ctl.open_new_tab("a");
        ctl.open_new_tab("b");
        ctl.mark_modified(a);
        ctl.relayout(Point::new(0, 0), 25, |t| t.len() as i32 * 7);

        let chromes = ctl.tab_chromes();
        assert_eq!(chromes.len(), 2);
        assert_eq!(chromes[0].title, "a*");
        assert!(!chromes[0].is_active);
        assert!(chromes[1].is_active);
    }

    #[test]
    fn test_edit_commands_need_a_tab() {
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        assert_eq!(
            ctl.handle(Message::Edit(EditCommand::Paste), &mut dialogs),
            Outcome::Continue
        );
        ctl.handle(Message::FileNew, &mut dialogs);
        assert_eq!(
            ctl.handle(Message::Edit(EditCommand::Paste), &mut dialogs),
            Outcome::Edit(EditCommand::Paste)
        );
    }

    #[test]
    fn test_tab_cycling_messages() {
        let mut ctl = TabStripController::<String>::new();
        let mut dialogs = ScriptedDialogs::default();
        let a = ctl.open_new_tab("a");
        let b = ctl.open_new_tab("b");

        ctl.handle(Message::TabNext, &mut dialogs);
        assert_eq!(ctl.registry().active_id(), Some(a));
        ctl.handle(Message::TabPrevious, &mut dialogs);
        assert_eq!(ctl.registry().active_id(), Some(b));
        ctl.relayout(Point::new(0, 0), 25, |t| t.len() as i32 * 7);
        let body = ctl.tab_rects()[0];
        ctl.handle(Message::TabStripClick { x: body.x + 2, y: body.y + 2 }, &mut dialogs);
        assert_eq!(ctl.registry().active_id(), Some(a));
    }
}
