//! Tests for command-line parsing and file dispatch

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rasterops::generation::{Country, Direction};
    use rasterops::io::cli::{Cli, CliCommand, FileProcessor, OperationKind, PatternCommand};
    use rasterops::io::configuration::{DEFAULT_MOSAIC_SEEDS, DEFAULT_SEED};
    use rasterops::io::image::{load_raster, save_raster};
    use rasterops::pipeline::Operation;
    use rasterops::transform::{LinearColorTransform, RasterTransform};
    use rasterops::Raster;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn sample() -> Raster {
        Raster::from_fn(5, 5, |r, c| [(r * 50) as u8, (c * 50) as u8, 100]).expect("valid size")
    }

    fn run(args: &[&str]) -> rasterops::Result<()> {
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        FileProcessor::new(cli).run()
    }

    // Tests process arguments parse in order with defaults filled in
    // Verified by deduplicating repeated operations
    #[test]
    fn test_parse_process() {
        let cli = Cli::try_parse_from([
            "rasterops", "process", "in", "--op", "sepiatone", "--op", "blur", "--op", "sepiatone",
        ])
        .expect("valid arguments");

        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(cli.should_show_progress());
        match cli.command {
            CliCommand::Process {
                target,
                ops,
                seeds,
                no_skip,
            } => {
                assert_eq!(target, PathBuf::from("in"));
                assert_eq!(
                    ops,
                    [
                        OperationKind::Sepiatone,
                        OperationKind::Blur,
                        OperationKind::Sepiatone
                    ]
                );
                assert_eq!(seeds, DEFAULT_MOSAIC_SEEDS);
                assert!(!no_skip);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    // Tests process requires at least one operation
    // Verified by making --op optional
    #[test]
    fn test_process_requires_operation() {
        assert!(Cli::try_parse_from(["rasterops", "process", "in"]).is_err());
        assert!(Cli::try_parse_from(["rasterops", "process", "in", "--op", "emboss"]).is_err());
    }

    // Tests generate subcommands parse their positional arguments
    // Verified by swapping height and width
    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "rasterops", "--quiet", "generate", "-o", "flag.png", "flag", "gr", "90", "140",
        ])
        .expect("valid arguments");

        assert!(!cli.should_show_progress());
        match cli.command {
            CliCommand::Generate { output, pattern } => {
                assert_eq!(output, PathBuf::from("flag.png"));
                assert!(matches!(
                    pattern,
                    PatternCommand::Flag {
                        country: Country::Greece,
                        height: 90,
                        width: 140
                    }
                ));
            }
            other => panic!("unexpected command {other:?}"),
        }

        let rainbow = PatternCommand::Rainbow {
            height: 7,
            width: 7,
            direction: Direction::Vertical,
        };
        assert!(rainbow.build().is_ok());
        assert!(PatternCommand::Checkerboard { size: 0 }.build().is_err());
    }

    // Tests operation kinds build the matching operations
    // Verified by ignoring the seed count
    #[test]
    fn test_operation_kind_build() {
        assert_eq!(
            OperationKind::Sepiatone.build(1, 0).ok(),
            Some(Operation::Transform(LinearColorTransform::sepia()))
        );
        match OperationKind::Mosaic.build(9, 5) {
            Ok(Operation::Mosaic(mosaic)) => {
                assert_eq!(mosaic.requested_seeds(), 9);
                assert_eq!(mosaic.rng_seed(), 5);
            }
            other => panic!("unexpected operation {other:?}"),
        }
        assert!(OperationKind::Mosaic.build(0, 5).is_err());
        assert_eq!(OperationKind::Greyscale.label(), "greyscale");
    }

    // Tests output names join the stem and the operation chain
    // Verified by dropping the extension
    #[test]
    fn test_get_output_path() {
        assert_eq!(
            FileProcessor::get_output_path(Path::new("dir/cat.png"), "sepiatone_blur"),
            PathBuf::from("dir/cat_sepiatone_blur.png")
        );
        assert_eq!(
            FileProcessor::get_output_path(Path::new("dog.jpg"), "dither"),
            PathBuf::from("dog_dither.jpg")
        );
    }

    // Tests directories are scanned for images, sorted, skipping outputs
    // Verified by including non-image files
    #[test]
    fn test_collect_files() {
        let dir = TempDir::new().expect("temp dir");
        for name in ["b.png", "a.bmp", "notes.txt", "a_blur.bmp"] {
            std::fs::write(dir.path().join(name), b"").expect("write file");
        }

        let files = FileProcessor::collect_files(dir.path(), "blur", false).expect("directory");
        assert_eq!(files, [dir.path().join("a.bmp"), dir.path().join("b.png")]);

        let skipped = FileProcessor::collect_files(dir.path(), "blur", true).expect("directory");
        assert_eq!(skipped, [dir.path().join("b.png")]);

        assert!(FileProcessor::collect_files(&dir.path().join("notes.txt"), "blur", false).is_err());
        assert!(FileProcessor::collect_files(&dir.path().join("none"), "blur", false).is_err());
    }

    // Tests processing writes the chained result next to the input
    // Verified by applying the operations in reverse order
    #[test]
    fn test_process_writes_output() {
        let dir = TempDir::new().expect("temp dir");
        let input = dir.path().join("photo.png");
        save_raster(&sample(), &input).expect("save input");

        let target = input.to_string_lossy().to_string();
        run(&["rasterops", "-q", "process", &target, "--op", "greyscale", "--op", "dither"])
            .expect("process succeeds");

        let output = load_raster(dir.path().join("photo_greyscale_dither.png")).expect("output");
        let expected = rasterops::transform::ErrorDiffusionDither::new()
            .apply(&LinearColorTransform::greyscale().apply(&sample()));
        assert_eq!(output, expected);
    }

    // Tests existing outputs are skipped unless --no-skip is given
    // Verified by always overwriting
    #[test]
    fn test_process_skips_existing() {
        let dir = TempDir::new().expect("temp dir");
        let input = dir.path().join("photo.png");
        let output = dir.path().join("photo_blur.png");
        save_raster(&sample(), &input).expect("save input");
        let marker = Raster::filled(1, 1, [1, 2, 3]).expect("valid size");
        save_raster(&marker, &output).expect("save marker");

        let target = dir.path().to_string_lossy().to_string();
        run(&["rasterops", "-q", "process", &target, "--op", "blur"]).expect("skip succeeds");
        assert_eq!(load_raster(&output).ok(), Some(marker));

        run(&["rasterops", "-q", "process", &target, "--op", "blur", "--no-skip"])
            .expect("overwrite succeeds");
        assert_eq!(load_raster(&output).map(|r| r.dimensions()).ok(), Some((5, 5)));
    }

    // Tests generate writes the pattern with the corrected width
    // Verified by keeping the requested width
    #[test]
    fn test_generate_writes_output() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("fr.png");
        let output = path.to_string_lossy().to_string();

        run(&["rasterops", "-q", "generate", "-o", &output, "flag", "FR", "30", "50"])
            .expect("generate succeeds");
        assert_eq!(load_raster(&path).map(|r| r.dimensions()).ok(), Some((30, 45)));
    }
}
