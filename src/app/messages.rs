use super::chart::TemplateResponse;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Form
    RenderRequested,
    RenderFinished(RenderOutcome),

    // Output actions
    CopyOutput,
    DownloadOutput,

    // Settings & Help
    OpenSettings,
    ShowAbout,
    Quit,
}

/// What the render worker thread reports back.
///
/// Failures arrive pre-formatted for the output area; the worker has no
/// access to widgets.
#[derive(Debug, Clone)]
pub enum RenderOutcome {
    Rendered(TemplateResponse),
    Failed(String),
}
