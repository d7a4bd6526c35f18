use super::*;
use crate::encode::request::OutputProfile;
use crate::foundation::core::Fps;

fn args_str(req: &EncodeRequest) -> Vec<String> {
    ffmpeg_args(req)
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

fn profile(audio: AudioOutput) -> OutputProfile {
    OutputProfile {
        video_codec: "libx264".to_string(),
        preset: "veryfast".to_string(),
        pixel_format: Some("yuv420p".to_string()),
        fps: Some(Fps::new(30, 1).unwrap()),
        audio,
        shortest: false,
        faststart: false,
    }
}

#[test]
fn still_input_loops_for_duration_before_input() {
    let req = EncodeRequest {
        inputs: vec![InputSource::Still {
            path: PathBuf::from("media/a.jpg"),
            duration_secs: 5.0,
        }],
        filter: Some(VideoFilter::Simple("format=yuv420p".to_string())),
        duration_secs: None,
        profile: profile(AudioOutput::Strip),
        out_path: PathBuf::from("tmp/clip_0.mp4"),
    };
    assert_eq!(
        args_str(&req),
        [
            "-y",
            "-hide_banner",
            "-loglevel",
            "error",
            "-loop",
            "1",
            "-t",
            "5",
            "-i",
            "media/a.jpg",
            "-vf",
            "format=yuv420p",
            "-r",
            "30",
            "-pix_fmt",
            "yuv420p",
            "-c:v",
            "libx264",
            "-preset",
            "veryfast",
            "-an",
            "tmp/clip_0.mp4",
        ]
    );
}

#[test]
fn clip_input_seeks_and_output_is_trimmed() {
    let req = EncodeRequest {
        inputs: vec![InputSource::Clip {
            path: PathBuf::from("b.mov"),
            start_secs: 0.0,
        }],
        filter: None,
        duration_secs: Some(2.5),
        profile: profile(AudioOutput::Strip),
        out_path: PathBuf::from("out.mp4"),
    };
    let args = args_str(&req);
    assert_eq!(&args[4..10], ["-ss", "0", "-i", "b.mov", "-t", "2.5"]);
}

#[test]
fn complex_filter_maps_and_audio_options() {
    let req = EncodeRequest {
        inputs: vec![
            InputSource::Stream {
                path: PathBuf::from("c0.mp4"),
            },
            InputSource::LoopedAudio {
                path: PathBuf::from("music.mp3"),
            },
        ],
        filter: Some(VideoFilter::Complex {
            graph: "[0:v]format=yuv420p[video_out]".to_string(),
            maps: vec!["[video_out]".to_string(), "1:a".to_string()],
        }),
        duration_secs: None,
        profile: OutputProfile {
            pixel_format: None,
            fps: None,
            shortest: true,
            faststart: true,
            ..profile(AudioOutput::Encode {
                codec: "aac".to_string(),
                bitrate: "192k".to_string(),
            })
        },
        out_path: PathBuf::from("output/slideshow.mp4"),
    };
    let args = args_str(&req).join(" ");
    assert!(args.contains("-i c0.mp4 -stream_loop -1 -i music.mp3"));
    assert!(args.contains(
        "-filter_complex [0:v]format=yuv420p[video_out] -map [video_out] -map 1:a"
    ));
    assert!(args.ends_with(
        "-c:v libx264 -preset veryfast -c:a aac -b:a 192k -shortest -movflags +faststart output/slideshow.mp4"
    ));
    assert!(!args.contains("-pix_fmt"));
}

#[test]
fn command_line_quotes_arguments_with_spaces() {
    let line = command_line(
        Path::new("ffmpeg"),
        &[OsString::from("-i"), OsString::from("my clip.mp4")],
    );
    assert_eq!(line, "ffmpeg -i \"my clip.mp4\"");
}

#[test]
fn dry_run_records_commands_without_running() {
    let mut enc = DryRunEncoder::new("ffmpeg");
    let req = EncodeRequest {
        inputs: vec![InputSource::Stream {
            path: PathBuf::from("in.mp4"),
        }],
        filter: None,
        duration_secs: None,
        profile: profile(AudioOutput::Strip),
        out_path: PathBuf::from("never/written.mp4"),
    };
    enc.encode(&req).unwrap();
    assert_eq!(enc.commands().len(), 1);
    assert!(enc.commands()[0].starts_with("ffmpeg -y"));
    assert!(!Path::new("never").exists());
}

#[test]
fn missing_binary_is_an_encode_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut enc = FfmpegEncoder::new("nonexistent_ffmpeg_12345");
    let req = EncodeRequest {
        inputs: vec![],
        filter: None,
        duration_secs: None,
        profile: profile(AudioOutput::Strip),
        out_path: dir.path().join("out.mp4"),
    };
    let err = enc.encode(&req).unwrap_err();
    assert!(matches!(err, SlideshowError::Encode(_)));
}

#[cfg(unix)]
#[test]
fn non_zero_exit_is_an_encode_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut enc = FfmpegEncoder::new("false");
    let req = EncodeRequest {
        inputs: vec![],
        filter: None,
        duration_secs: None,
        profile: profile(AudioOutput::Strip),
        out_path: dir.path().join("out.mp4"),
    };
    let err = enc.encode(&req).unwrap_err();
    assert!(matches!(err, SlideshowError::Encode(_)));
    assert!(err.to_string().contains("exited with status"));
}

#[test]
fn stderr_tail_keeps_last_lines() {
    let text: String = (0..30).map(|i| format!("line {i}\n")).collect();
    let tail = stderr_tail(&text);
    assert!(tail.starts_with("line 10"));
    assert!(tail.ends_with("line 29"));
}
