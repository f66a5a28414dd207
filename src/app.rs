use crate::clock::Clock;
use crate::domain::{Task, TimerMode, UiMode, ViewMode, ALL_SUBJECTS};
use crate::notifications::Notifier;
use crate::persistence::{save_settings, Settings, TaskStorage};
use crate::task_store::{PersistIntent, TaskStore};
use crate::ticker::{one_second, ScheduleHandle, Scheduler};
use crate::timer::{TimerEngine, TimerEvent};
use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, warn};

/// Input form state for adding tasks
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub text: String,
    pub subject: String,
    pub editing_field: usize, // 0 = task, 1 = subject
}

/// Main application state
pub struct AppState {
    pub tasks: TaskStore,
    pub timer: TimerEngine,
    pub scheduler: Scheduler,
    pub settings: Settings,
    pub current_time: DateTime<Local>,
    pub selected_subject: String,
    pub selected_index: usize, // Index into the filtered list
    pub view_mode: ViewMode,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub modal: Option<String>,
    pub status_message: Option<String>,

    countdown: Option<ScheduleHandle>,
    clock_tick: ScheduleHandle,
    storage: Box<dyn TaskStorage>,
    notifier: Box<dyn Notifier>,
    clock: Rc<dyn Clock>,
    settings_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(
        storage: Box<dyn TaskStorage>,
        notifier: Box<dyn Notifier>,
        clock: Rc<dyn Clock>,
        settings: Settings,
        now: Instant,
    ) -> Self {
        let tasks = TaskStore::new(storage.load(), clock.clone());
        let timer = TimerEngine::new(settings.durations());

        let mut scheduler = Scheduler::new();
        let clock_tick = scheduler.schedule_every(one_second(), now);

        Self {
            tasks,
            timer,
            scheduler,
            current_time: clock.now(),
            view_mode: settings.view_mode,
            settings,
            selected_subject: ALL_SUBJECTS.to_string(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            modal: None,
            status_message: None,
            countdown: None,
            clock_tick,
            storage,
            notifier,
            clock,
            settings_path: None,
        }
    }

    /// Write view changes back to this settings file
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    /// Whether a countdown schedule is live
    pub fn has_live_countdown(&self) -> bool {
        self.countdown
            .map(|handle| self.scheduler.is_scheduled(handle))
            .unwrap_or(false)
    }

    // ---- timer ----

    /// Switch timer mode, cancelling the old countdown first
    pub fn set_mode(&mut self, mode: TimerMode) {
        self.cancel_countdown();
        self.timer.set_mode(mode);
    }

    pub fn start_timer(&mut self, now: Instant) {
        if self.timer.start() && !self.has_live_countdown() {
            self.countdown = Some(self.scheduler.schedule_every(one_second(), now));
        }
    }

    pub fn pause_timer(&mut self) {
        self.timer.pause();
        self.cancel_countdown();
    }

    pub fn reset_timer(&mut self) {
        self.cancel_countdown();
        self.timer.reset();
    }

    /// START / PAUSE button
    pub fn toggle_timer(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.pause_timer();
        } else {
            self.start_timer(now);
        }
    }

    fn cancel_countdown(&mut self) {
        if let Some(handle) = self.countdown.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Run every schedule that is due at `now`
    pub fn on_tick(&mut self, now: Instant) {
        for handle in self.scheduler.due(now) {
            if Some(handle) == self.countdown {
                if let Some(event) = self.timer.tick() {
                    self.cancel_countdown();
                    self.handle_timer_event(event);
                }
            } else if handle == self.clock_tick {
                self.current_time = self.clock.now();
            }
        }
    }

    fn handle_timer_event(&mut self, event: TimerEvent) {
        let message = event.message();
        self.notifier.notify(&message);
        self.modal = Some(message);
        self.ui_mode = UiMode::SessionComplete;
    }

    /// Close the session-complete notice
    pub fn dismiss_modal(&mut self) {
        self.modal = None;
        self.ui_mode = UiMode::Normal;
    }

    // ---- tasks ----

    /// Tasks under the current subject filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.filter_by_subject(&self.selected_subject)
    }

    /// Id of the highlighted task, if any
    pub fn selected_task_id(&self) -> Option<i64> {
        self.visible_tasks().get(self.selected_index).map(|t| t.id)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_tasks().len() {
            self.selected_index += 1;
        }
    }

    /// Add a task. Returns false when blank input was rejected.
    pub fn add_task(&mut self, text: &str, subject: &str) -> bool {
        match self.tasks.add_task(text, subject) {
            Ok(intent) => {
                self.persist(intent);
                true
            }
            Err(e) => {
                debug!(error = %e, "task not added");
                false
            }
        }
    }

    /// Toggle completion of the highlighted task
    pub fn toggle_selected(&mut self) {
        if let Some(intent) = self.selected_task_id().and_then(|id| self.tasks.toggle_task(id)) {
            self.persist(intent);
        }
    }

    /// Delete the highlighted task
    pub fn delete_selected(&mut self) {
        if let Some(intent) = self.selected_task_id().and_then(|id| self.tasks.delete_task(id)) {
            self.persist(intent);
            self.ensure_valid_filter();
            self.clamp_selection();
        }
    }

    /// Execute a persistence intent. Failures keep in-memory state and surface
    /// on the status line.
    fn persist(&mut self, intent: PersistIntent) {
        match self.storage.save(intent.tasks()) {
            Ok(()) => self.status_message = None,
            Err(e) => {
                warn!(error = %e, "keeping unsaved tasks in memory");
                self.status_message = Some(format!("Could not save tasks: {}", e));
            }
        }
    }

    /// Save everything (called on exit)
    pub fn save(&mut self) -> Result<()> {
        self.storage.save(self.tasks.tasks())?;
        Ok(())
    }

    // ---- subject filter ----

    /// Filter by `subject` if it is currently listed
    pub fn select_subject(&mut self, subject: &str) {
        if self.tasks.list_subjects().iter().any(|s| s == subject) {
            self.selected_subject = subject.to_string();
            self.selected_index = 0;
        }
    }

    pub fn next_subject(&mut self) {
        self.step_subject(1);
    }

    pub fn previous_subject(&mut self) {
        self.step_subject(-1);
    }

    fn step_subject(&mut self, step: isize) {
        let subjects = self.tasks.list_subjects();
        let current = subjects
            .iter()
            .position(|s| *s == self.selected_subject)
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(subjects.len() as isize) as usize;

        self.select_subject(&subjects[next]);
    }

    /// Fall back to ALL once the selected subject has no tasks left
    fn ensure_valid_filter(&mut self) {
        if !self.tasks.list_subjects().contains(&self.selected_subject) {
            self.selected_subject = ALL_SUBJECTS.to_string();
            self.selected_index = 0;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    // ---- view ----

    /// Switch between list and grid, remembering the choice in settings.json
    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
        self.settings.view_mode = self.view_mode;

        if let Some(path) = &self.settings_path {
            if let Err(e) = save_settings(path, &self.settings) {
                warn!(error = %e, "could not save settings");
                self.status_message = Some(format!("Could not save settings: {}", e));
            }
        }
    }

    // ---- input form ----

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Toggle between the task and subject fields
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    /// Add character to input form (current field)
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.text.push(c),
                _ => form.subject.push(c),
            }
        }
    }

    /// Backspace in input form (current field)
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.text.pop(),
                _ => form.subject.pop(),
            };
        }
    }

    /// Submit the form. Blank fields leave it open with input intact.
    pub fn submit_input_form(&mut self) {
        let Some(form) = self.input_form.clone() else {
            return;
        };

        if self.add_task(&form.text, &form.subject) {
            self.input_form = None;
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }
}
