use crate::encode::request::{AudioOutput, EncodeRequest, Encoder, InputSource, VideoFilter};
use crate::foundation::error::{SlideshowError, SlideshowResult};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Lines of ffmpeg stderr kept in error messages.
const STDERR_TAIL_LINES: usize = 20;

/// [`Encoder`] that runs the system `ffmpeg` once per request.
#[derive(Clone, Debug)]
pub struct FfmpegEncoder {
    bin: PathBuf,
}

impl FfmpegEncoder {
    /// Use the `ffmpeg` binary at `bin`.
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Encoder for FfmpegEncoder {
    fn encode(&mut self, req: &EncodeRequest) -> SlideshowResult<()> {
        ensure_parent_dir(&req.out_path)?;

        let args = ffmpeg_args(req);
        tracing::debug!(command = %command_line(&self.bin, &args), "running ffmpeg");

        let out = Command::new(&self.bin)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                SlideshowError::encode(format!(
                    "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
                ))
            })?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(SlideshowError::encode(format!(
                "ffmpeg exited with status {} writing '{}': {}",
                out.status,
                req.out_path.display(),
                stderr_tail(&stderr)
            )));
        }
        Ok(())
    }
}

/// [`Encoder`] that only logs the command it would run.
#[derive(Clone, Debug)]
pub struct DryRunEncoder {
    bin: PathBuf,
    commands: Vec<String>,
}

impl DryRunEncoder {
    /// Log commands as if `bin` were the encoder.
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            commands: Vec::new(),
        }
    }

    /// Command lines seen so far, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl Encoder for DryRunEncoder {
    fn encode(&mut self, req: &EncodeRequest) -> SlideshowResult<()> {
        let line = command_line(&self.bin, &ffmpeg_args(req));
        tracing::info!(command = %line, "dry run");
        self.commands.push(line);
        Ok(())
    }
}

/// Render a request as ffmpeg arguments (without the program name).
pub fn ffmpeg_args(req: &EncodeRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    push_args(&mut args, ["-y", "-hide_banner", "-loglevel", "error"]);

    for input in &req.inputs {
        match input {
            InputSource::Still { duration_secs, .. } => {
                push_args(&mut args, ["-loop", "1", "-t", &duration_secs.to_string()]);
            }
            InputSource::Clip { start_secs, .. } => {
                push_args(&mut args, ["-ss", &start_secs.to_string()]);
            }
            InputSource::LoopedAudio { .. } => push_args(&mut args, ["-stream_loop", "-1"]),
            InputSource::Stream { .. } => {}
        }
        args.push("-i".into());
        args.push(input.path().as_os_str().to_owned());
    }

    if let Some(d) = req.duration_secs {
        push_args(&mut args, ["-t", &d.to_string()]);
    }

    match &req.filter {
        Some(VideoFilter::Simple(chain)) => push_args(&mut args, ["-vf", chain]),
        Some(VideoFilter::Complex { graph, maps }) => {
            push_args(&mut args, ["-filter_complex", graph]);
            for m in maps {
                push_args(&mut args, ["-map", m]);
            }
        }
        None => {}
    }

    let p = &req.profile;
    if let Some(fps) = p.fps {
        push_args(&mut args, ["-r", &fps.to_string()]);
    }
    if let Some(pix_fmt) = &p.pixel_format {
        push_args(&mut args, ["-pix_fmt", pix_fmt]);
    }
    push_args(&mut args, ["-c:v", &p.video_codec, "-preset", &p.preset]);
    match &p.audio {
        AudioOutput::Strip => args.push("-an".into()),
        AudioOutput::Encode { codec, bitrate } => {
            push_args(&mut args, ["-c:a", codec, "-b:a", bitrate]);
        }
    }
    if p.shortest {
        args.push("-shortest".into());
    }
    if p.faststart {
        push_args(&mut args, ["-movflags", "+faststart"]);
    }

    args.push(req.out_path.as_os_str().to_owned());
    args
}

fn push_args<const N: usize>(args: &mut Vec<OsString>, items: [&str; N]) {
    args.extend(items.into_iter().map(OsString::from));
}

/// Shell-like rendering of a command for logs.
pub fn command_line(bin: &Path, args: &[OsString]) -> String {
    std::iter::once(bin.as_os_str())
        .chain(args.iter().map(OsString::as_os_str))
        .map(|a| {
            let a = a.to_string_lossy();
            if a.is_empty() || a.contains(|c: char| c.is_whitespace() || c == '"' || c == ';') {
                format!("\"{}\"", a.replace('"', "\\\""))
            } else {
                a.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.trim().lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> SlideshowResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
