use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;

use tracing::{debug, info};

use crate::app::domain::dirty::{ChangeKind, DirtyTracker};
use crate::app::domain::file::FileEntry;
use crate::app::domain::messages::{DocumentEvent, Message};
use crate::app::domain::settings::EditorSettings;
use crate::app::infrastructure::error::{EditorError, Result};
use crate::app::infrastructure::widget::{ChangeGate, ChangeNotifier, EditorArea, EditorWidget};

/// One widget per open file, plus the save-point state of its content.
struct EditorWrapper<W> {
    file: FileEntry,
    widget: W,
    tracker: Rc<RefCell<DirtyTracker>>,
    notifier: ChangeNotifier,
}

impl<W: EditorWidget> EditorWrapper<W> {
    /// Load `text` without producing dirty notifications and make sure the
    /// previous content can't be reached by undo.
    fn init_content(&mut self, text: &str, gate: &ChangeGate) {
        {
            let _quiet = gate.suppress();
            self.widget.set_value(text);
        }
        self.widget.clear_history();
        self.tracker.borrow_mut().mark_clean(self.widget.history_size());
    }

    fn mark_clean(&mut self) {
        self.tracker.borrow_mut().mark_clean(self.widget.history_size());
        self.notifier.send_dirty(false);
    }

    fn is_dirty(&self) -> bool {
        self.tracker.borrow().is_dirty()
    }
}

/// Keeps track of which editor widget belongs to which file and which one
/// is currently shown.
pub struct EditorManager<A: EditorArea> {
    area: Option<A>,
    editors: Vec<EditorWrapper<A::Widget>>,
    active: Option<FileEntry>,
    any_created: bool,
    gate: ChangeGate,
    sender: Sender<Message>,
    settings: EditorSettings,
}

impl<A: EditorArea> EditorManager<A> {
    pub fn new(sender: Sender<Message>, settings: EditorSettings) -> Self {
        Self {
            area: None,
            editors: Vec::new(),
            active: None,
            any_created: false,
            gate: ChangeGate::new(),
            sender,
            settings,
        }
    }

    /// Designate the area that holds the editor widgets. Only allowed until
    /// the first editor has been created.
    pub fn set_editor_area(&mut self, area: A) -> Result<()> {
        if self.any_created {
            return Err(EditorError::EditorAreaLocked);
        }
        self.area = Some(area);
        Ok(())
    }

    pub fn area(&self) -> Option<&A> {
        self.area.as_ref()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Show the editor for `file`, creating it with `text` if it doesn't
    /// exist yet. `text` is ignored for an existing editor.
    pub fn show_or_create_editor(&mut self, file: &FileEntry, text: &str) -> Result<()> {
        let index = match self.find_editor(file) {
            Some(index) => index,
            None => self.create_editor(file, text)?,
        };

        // Hide whatever was visible before
        match self.active_index() {
            Some(previous) if previous != index => {
                self.editors[previous].widget.set_visible(false);
            }
            Some(_) => {}
            None => self.set_placeholder_visible(false),
        }

        let changed = self.active.as_ref() != Some(file);
        self.editors[index].widget.set_visible(true);
        self.active = Some(file.clone());

        if self.settings.focus_on_show {
            self.editors[index].widget.focus();
        }
        if changed {
            debug!("Showing editor for {}", file);
            self.send(Message::ActiveEditorChanged(Some(file.clone())));
        }
        Ok(())
    }

    /// Hide the active editor, if any, and show the placeholder instead.
    pub fn show_no_editor(&mut self) {
        let Some(index) = self.active_index() else {
            return;
        };
        self.editors[index].widget.set_visible(false);
        self.active = None;
        self.set_placeholder_visible(true);

        debug!("Showing no editor");
        self.send(Message::ActiveEditorChanged(None));
    }

    /// Close the editor for `file`, switching to no editor first if it is
    /// the active one.
    pub fn destroy_editor(&mut self, file: &FileEntry) -> Result<()> {
        let index = self.editor_index(file)?;
        if self.active.as_ref() == Some(file) {
            self.show_no_editor();
        }

        let wrapper = self.editors.remove(index);
        let _quiet = self.gate.suppress();
        if let Some(area) = self.area.as_mut() {
            area.remove_widget(wrapper.widget);
        }

        debug!("Destroyed editor for {} ({} open)", file, self.editors.len());
        Ok(())
    }

    pub fn focus_editor(&mut self) {
        if let Some(index) = self.active_index() {
            self.editors[index].widget.focus();
        }
    }

    pub fn has_editor_for(&self, file: &FileEntry) -> bool {
        self.find_editor(file).is_some()
    }

    pub fn get_editor_contents(&self, file: &FileEntry) -> Result<String> {
        let index = self.editor_index(file)?;
        Ok(self.editors[index].widget.value())
    }

    pub fn is_editor_dirty(&self, file: &FileEntry) -> Result<bool> {
        let index = self.editor_index(file)?;
        Ok(self.editors[index].is_dirty())
    }

    /// Record the current undo depth of `file`'s editor as its save point.
    pub fn mark_editor_clean(&mut self, file: &FileEntry) -> Result<()> {
        let index = self.editor_index(file)?;
        self.editors[index].mark_clean();
        Ok(())
    }

    /// Recompute `file`'s dirty flag from its widget's current history.
    ///
    /// Widgets normally do this themselves through their notifier; this is
    /// for hosts whose widgets only expose their history depths. Pass
    /// `ChangeKind::Other` when the kind of change is unknown.
    pub fn editor_changed(&self, file: &FileEntry, kind: ChangeKind) -> Result<()> {
        let index = self.editor_index(file)?;
        let wrapper = &self.editors[index];
        wrapper.notifier.changed(kind, wrapper.widget.history_size());
        Ok(())
    }

    pub fn widget(&self, file: &FileEntry) -> Result<&A::Widget> {
        let index = self.editor_index(file)?;
        Ok(&self.editors[index].widget)
    }

    /// Run `f` against `file`'s widget.
    ///
    /// Visibility belongs to the manager: `f` must not call `set_visible`,
    /// or more than one widget (or a widget and the placeholder) may show.
    pub fn edit<R>(&mut self, file: &FileEntry, f: impl FnOnce(&mut A::Widget) -> R) -> Result<R> {
        let index = self.editor_index(file)?;
        Ok(f(&mut self.editors[index].widget))
    }

    pub fn active_file(&self) -> Option<&FileEntry> {
        self.active.as_ref()
    }

    /// Files with an editor, in the order their editors were created.
    pub fn open_files(&self) -> impl Iterator<Item = &FileEntry> {
        self.editors.iter().map(|e| &e.file)
    }

    pub fn editor_count(&self) -> usize {
        self.editors.len()
    }

    /// React to a notification from the document manager. These are only
    /// logged for now.
    pub fn handle_document_event(&self, event: &DocumentEvent) {
        let has_editor = event.file().is_some_and(|f| self.has_editor_for(f));
        if self.settings.log_document_events {
            info!(has_editor = has_editor, "{}", event);
        } else {
            debug!(has_editor = has_editor, "{}", event);
        }
    }

    fn create_editor(&mut self, file: &FileEntry, text: &str) -> Result<usize> {
        let area = self.area.as_mut().ok_or(EditorError::NoEditorArea)?;

        let tracker = Rc::new(RefCell::new(DirtyTracker::new()));
        let notifier = ChangeNotifier::new(
            file.clone(),
            tracker.clone(),
            self.gate.clone(),
            self.sender.clone(),
        );
        let widget = area.create_widget(notifier.clone());

        let mut wrapper = EditorWrapper {
            file: file.clone(),
            widget,
            tracker,
            notifier,
        };
        wrapper.init_content(text, &self.gate);

        self.editors.push(wrapper);
        self.any_created = true;
        debug!("Created editor for {} ({} open)", file, self.editors.len());
        Ok(self.editors.len() - 1)
    }

    fn set_placeholder_visible(&mut self, visible: bool) {
        let visible = visible && self.settings.show_placeholder;
        if let Some(area) = self.area.as_mut() {
            area.set_placeholder_visible(visible);
        }
    }

    fn find_editor(&self, file: &FileEntry) -> Option<usize> {
        self.editors.iter().position(|e| e.file == *file)
    }

    fn editor_index(&self, file: &FileEntry) -> Result<usize> {
        self.find_editor(file)
            .ok_or_else(|| EditorError::NoEditor(file.full_path.clone()))
    }

    fn active_index(&self) -> Option<usize> {
        let active = self.active.as_ref()?;
        self.find_editor(active)
    }

    fn send(&self, message: Message) {
        if self.sender.send(message).is_err() {
            debug!("Message dropped: receiver is gone");
        }
    }
}
