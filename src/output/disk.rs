use std::io::{Cursor, Write as _};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::foundation::error::{AnimdlError, AnimdlResult};
use crate::output::sink::FrameOutput;
use crate::raster::frame::Frame;

/// Options for [`ImageOutput`].
#[derive(Clone, Debug)]
pub struct ImageOutputOpts {
    /// Viewer spawned by `display`; it receives a PNG on stdin (`<program> -`).
    ///
    /// `None` turns `display` into a logged no-op.
    pub display_program: Option<PathBuf>,
}

impl Default for ImageOutputOpts {
    fn default() -> Self {
        Self {
            display_program: Some(PathBuf::from("display")),
        }
    }
}

/// Output backed by image files on disk and an external viewer process.
///
/// Directories are never created here; the caller prepares the output location.
#[derive(Clone, Debug, Default)]
pub struct ImageOutput {
    opts: ImageOutputOpts,
}

impl ImageOutput {
    /// Create an output with `opts`.
    pub fn new(opts: ImageOutputOpts) -> Self {
        Self { opts }
    }
}

impl FrameOutput for ImageOutput {
    fn display(&mut self, frame: &Frame) -> AnimdlResult<()> {
        let Some(program) = self.opts.display_program.as_ref() else {
            tracing::info!("display disabled; frame not shown");
            return Ok(());
        };

        let png = encode_png(frame)?;
        let mut child = Command::new(program)
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                AnimdlError::output(format!(
                    "failed to spawn display program '{}': {e}",
                    program.display()
                ))
            })?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| AnimdlError::output("failed to open display stdin (unexpected)"))?;
            stdin.write_all(&png).map_err(|e| {
                AnimdlError::output(format!("failed to write frame to display stdin: {e}"))
            })?;
        }

        let status = child
            .wait()
            .map_err(|e| AnimdlError::output(format!("failed to wait for display: {e}")))?;
        if !status.success() {
            return Err(AnimdlError::output(format!(
                "display program exited with status {status}"
            )));
        }
        Ok(())
    }

    fn save(&mut self, frame: &Frame, path: &Path) -> AnimdlResult<()> {
        let (path, format) = resolve_format(path);
        image::save_buffer_with_format(
            &path,
            &frame.to_rgb8_bytes(),
            frame.width(),
            frame.height(),
            image::ColorType::Rgb8,
            format,
        )
        .map_err(|e| AnimdlError::output(format!("write image '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "wrote frame");
        Ok(())
    }
}

/// Pick the encoding from the file extension; names without a recognized image extension get
/// `.png` appended.
pub fn resolve_format(path: &Path) -> (PathBuf, image::ImageFormat) {
    match image::ImageFormat::from_path(path) {
        Ok(format) => (path.to_path_buf(), format),
        Err(_) => {
            let mut s = path.as_os_str().to_owned();
            s.push(".png");
            (PathBuf::from(s), image::ImageFormat::Png)
        }
    }
}

fn encode_png(frame: &Frame) -> AnimdlResult<Vec<u8>> {
    let img = image::RgbImage::from_raw(frame.width(), frame.height(), frame.to_rgb8_bytes())
        .ok_or_else(|| AnimdlError::output("frame buffer size does not match its canvas"))?;
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| AnimdlError::output(format!("encode png: {e}")))?;
    Ok(out)
}

/// Return `true` when `program` can be invoked from `PATH`.
pub fn is_program_on_path(program: &Path) -> bool {
    Command::new(program)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/output/disk.rs"]
mod tests;
