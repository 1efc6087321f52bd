//! Dialog view state
//!
//! The guide shows content in three modal dialogs: the selected step, the
//! terms notice and the tuition-free ("gratuidad") notice. Closing is a
//! two-phase transition so the host can play its exit animation: `hide`
//! moves the dialog to `Closing` and returns how long to wait, the host
//! then calls `finish_close`.

use std::time::Duration;

use crate::data::content::Step;

/// Delay between `hide` and `finish_close`
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(300);

/// The modal dialogs of the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Step,
    Terms,
    Gratuidad,
}

/// Visibility phase of one dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogPhase {
    #[default]
    Hidden,
    Open,
    /// Still visible, exit transition running
    Closing,
}

impl DialogPhase {
    /// Whether the dialog is on screen (open or closing)
    pub fn is_visible(self) -> bool {
        !matches!(self, DialogPhase::Hidden)
    }
}

/// View state of the guide page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub step_dialog: DialogPhase,
    pub terms_dialog: DialogPhase,
    pub gratuidad_dialog: DialogPhase,
    /// Number of the step shown in the step dialog
    pub selected_step: Option<u32>,
    pub selected_pdf_index: usize,
    pub current_pdf_url: Option<String>,
    pub selected_modality_index: usize,
    pub show_steps: bool,
    /// Background scrolling is disabled while a dialog is on screen
    pub scroll_locked: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            step_dialog: DialogPhase::Hidden,
            terms_dialog: DialogPhase::Hidden,
            gratuidad_dialog: DialogPhase::Hidden,
            selected_step: None,
            selected_pdf_index: 0,
            current_pdf_url: None,
            selected_modality_index: 0,
            show_steps: true,
            scroll_locked: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, kind: DialogKind) -> DialogPhase {
        match kind {
            DialogKind::Step => self.step_dialog,
            DialogKind::Terms => self.terms_dialog,
            DialogKind::Gratuidad => self.gratuidad_dialog,
        }
    }

    fn phase_mut(&mut self, kind: DialogKind) -> &mut DialogPhase {
        match kind {
            DialogKind::Step => &mut self.step_dialog,
            DialogKind::Terms => &mut self.terms_dialog,
            DialogKind::Gratuidad => &mut self.gratuidad_dialog,
        }
    }

    /// Open the step dialog on `step`
    ///
    /// PDF and modality selections reset to the first entry. The offer
    /// step (number 1) preloads its first PDF.
    pub fn show_step(&mut self, step: &Step) {
        self.selected_step = Some(step.number);
        self.selected_pdf_index = 0;
        self.selected_modality_index = 0;
        self.show(DialogKind::Step);

        if step.number == 1 {
            if let Some(pdf) = step.pdfs.first() {
                self.select_pdf(0, &pdf.url);
            }
        }
    }

    /// Start closing the step dialog, see [`ViewState::hide`]
    pub fn hide_step(&mut self) -> Duration {
        self.hide(DialogKind::Step)
    }

    /// Open a dialog
    ///
    /// The step dialog only reopens on an already selected step; use
    /// [`ViewState::show_step`] to open it on a new one.
    pub fn show(&mut self, kind: DialogKind) {
        if kind == DialogKind::Step && self.selected_step.is_none() {
            return;
        }
        *self.phase_mut(kind) = DialogPhase::Open;
        self.scroll_locked = true;
        tracing::debug!(?kind, "dialog opened");
    }

    /// Start closing a dialog
    ///
    /// Returns the delay after which the host must call
    /// [`ViewState::finish_close`].
    pub fn hide(&mut self, kind: DialogKind) -> Duration {
        let phase = self.phase_mut(kind);
        if *phase == DialogPhase::Open {
            *phase = DialogPhase::Closing;
        }
        CLOSE_TRANSITION
    }

    /// Complete a close transition started by [`ViewState::hide`]
    ///
    /// No-op unless the dialog is `Closing`, so a timer that fires after
    /// the dialog was reopened leaves it open.
    pub fn finish_close(&mut self, kind: DialogKind) {
        if self.phase(kind) != DialogPhase::Closing {
            return;
        }
        *self.phase_mut(kind) = DialogPhase::Hidden;
        if kind == DialogKind::Step {
            self.selected_step = None;
        }
        if !self.any_visible() {
            self.scroll_locked = false;
        }
        tracing::debug!(?kind, "dialog closed");
    }

    /// Whether any dialog is on screen
    pub fn any_visible(&self) -> bool {
        self.step_dialog.is_visible()
            || self.terms_dialog.is_visible()
            || self.gratuidad_dialog.is_visible()
    }

    pub fn select_pdf(&mut self, index: usize, url: &str) {
        self.selected_pdf_index = index;
        self.current_pdf_url = Some(url.to_string());
    }

    pub fn select_modality(&mut self, index: usize) {
        self.selected_modality_index = index;
    }

    /// Show the step list (it is never hidden again)
    pub fn reveal_steps(&mut self) {
        self.show_steps = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::content::{ContentCatalog, PdfDocument};

    fn step(number: u32) -> Step {
        Step {
            number,
            title: format!("Paso {}", number),
            description: String::new(),
            detailed_info: None,
            requirements: Vec::new(),
            tips: Vec::new(),
            pdfs: vec![PdfDocument {
                name: "A".to_string(),
                url: "documents/a.pdf".to_string(),
            }],
            modalities: Vec::new(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert!(state.show_steps);
        assert!(!state.any_visible());
        assert!(!state.scroll_locked);
    }

    #[test]
    fn test_show_first_step_preloads_pdf() {
        let catalog = ContentCatalog::builtin().unwrap();
        let mut state = ViewState::new();
        state.show_step(catalog.step(1).unwrap());

        assert_eq!(state.step_dialog, DialogPhase::Open);
        assert_eq!(state.selected_step, Some(1));
        assert_eq!(
            state.current_pdf_url.as_deref(),
            Some("documents/OFERTA-ACADEMICA-SEDE-NEIVA.pdf")
        );
        assert!(state.scroll_locked);
    }

    #[test]
    fn test_other_steps_do_not_preload() {
        let mut state = ViewState::new();
        state.show_step(&step(3));
        assert_eq!(state.current_pdf_url, None);
    }

    #[test]
    fn test_show_step_resets_selections() {
        let mut state = ViewState::new();
        state.select_pdf(2, "documents/c.pdf");
        state.select_modality(3);
        state.show_step(&step(2));
        assert_eq!(state.selected_pdf_index, 0);
        assert_eq!(state.selected_modality_index, 0);
    }

    #[test]
    fn test_close_transition() {
        let mut state = ViewState::new();
        state.show_step(&step(2));

        let delay = state.hide_step();
        assert_eq!(delay, CLOSE_TRANSITION);
        assert_eq!(state.step_dialog, DialogPhase::Closing);
        assert!(state.scroll_locked);
        assert_eq!(state.selected_step, Some(2));

        state.finish_close(DialogKind::Step);
        assert_eq!(state.step_dialog, DialogPhase::Hidden);
        assert_eq!(state.selected_step, None);
        assert!(!state.scroll_locked);
    }

    #[test]
    fn test_stale_finish_close_keeps_reopened_dialog() {
        let mut state = ViewState::new();
        state.show(DialogKind::Terms);
        state.hide(DialogKind::Terms);
        state.show(DialogKind::Terms);
        state.finish_close(DialogKind::Terms);
        assert_eq!(state.terms_dialog, DialogPhase::Open);
        assert!(state.scroll_locked);
    }

    #[test]
    fn test_scroll_stays_locked_while_another_dialog_open() {
        let mut state = ViewState::new();
        state.show(DialogKind::Terms);
        state.show(DialogKind::Gratuidad);
        state.hide(DialogKind::Gratuidad);
        state.finish_close(DialogKind::Gratuidad);
        assert!(state.scroll_locked);
        assert_eq!(state.phase(DialogKind::Gratuidad), DialogPhase::Hidden);
    }

    #[test]
    fn test_step_dialog_needs_selected_step() {
        let mut state = ViewState::new();
        state.show(DialogKind::Step);
        assert_eq!(state.step_dialog, DialogPhase::Hidden);
        assert!(!state.scroll_locked);

        state.show_step(&step(4));
        state.hide_step();
        state.show(DialogKind::Step);
        assert_eq!(state.step_dialog, DialogPhase::Open);
        assert_eq!(state.selected_step, Some(4));
    }

    #[test]
    fn test_hide_hidden_dialog_is_noop() {
        let mut state = ViewState::new();
        state.hide(DialogKind::Gratuidad);
        assert_eq!(state.gratuidad_dialog, DialogPhase::Hidden);
    }

    #[test]
    fn test_reveal_steps_never_hides() {
        let mut state = ViewState::new();
        state.show_steps = false;
        state.reveal_steps();
        state.reveal_steps();
        assert!(state.show_steps);
    }
}
