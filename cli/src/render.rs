//! Terminal rendering of the widget.

use imgdrop::{Control, WidgetView, LOADING_TEXT};

/// Picker placeholder in the terminal.
pub const PICKER_TEXT: &str = "[ choose a file ]";

/// One line per visible part: control, then error, then image.
pub fn render_text(view: &WidgetView<'_>) -> String {
    let mut lines = Vec::with_capacity(3);

    lines.push(match view.control {
        Control::Loading => LOADING_TEXT.to_string(),
        Control::Picker => PICKER_TEXT.to_string(),
    });
    if let Some(error) = view.error {
        lines.push(format!("error: {}", error));
    }
    if let Some(url) = view.thumbnail {
        lines.push(format!("image: {}", url));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgdrop::UploadState;

    #[test]
    fn test_render_idle() {
        assert_eq!(render_text(&UploadState::default().view()), "[ choose a file ]");
    }

    #[test]
    fn test_render_busy() {
        let mut state = UploadState::default();
        state.begin();
        assert_eq!(render_text(&state.view()), "Uploading...");
    }

    #[test]
    fn test_render_error_and_stale_image() {
        let mut state = UploadState::default();
        state.succeed("https://x/y.png".into());
        state.fail();

        assert_eq!(
            render_text(&state.view()),
            "[ choose a file ]\n\
             error: Failed to upload image. Please try again.\n\
             image: https://x/y.png"
        );
    }
}
