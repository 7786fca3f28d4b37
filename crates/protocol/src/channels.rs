//! Channel and topic names understood by the sandbox script.

/// Sent by the sandbox once its page has finished loading for the first time.
pub const FIRST_LOADED: &str = "wv-first-loaded";
/// Sent by the sandbox when the user activates a link; carries `[href]`.
pub const LINK_CLICKED: &str = "did-click-link";

pub const RENDER_HTML: &str = "wv-render-html";
pub const CHANGE_FONT_SIZE: &str = "wv-change-fontsize";
pub const SCROLL: &str = "wv-scroll";
pub const SCROLL_TO_TARGET: &str = "scroll-target";

/// Notification topic published by the outline when a heading is chosen.
pub const TOC_JUMP: &str = "toc-jump";
