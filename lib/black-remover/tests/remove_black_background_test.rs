use black_remover::{ErrorKind, RemoveConfig, TRANSPARENT, remove_black_background};
use image::{GrayImage, ImageFormat, Luma, Rgba, RgbaImage};

#[test]
fn test_two_pixel_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.png");

    let mut image = RgbaImage::new(2, 1);
    image.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
    image.put_pixel(1, 0, Rgba([200, 200, 200, 255]));
    image.save(&input).unwrap();

    let summary = remove_black_background(&input, &output).unwrap();
    assert_eq!(summary.width, 2);
    assert_eq!(summary.height, 1);
    assert_eq!(summary.total_pixels, 2);
    assert_eq!(summary.replaced_pixels, 1);

    let result = image::open(&output).unwrap().to_rgba8();
    assert_eq!(*result.get_pixel(0, 0), TRANSPARENT);
    assert_eq!(*result.get_pixel(1, 0), Rgba([200, 200, 200, 255]));
}

#[test]
fn test_missing_input_reports_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.png");
    let output = dir.path().join("output.png");

    let err = remove_black_background(&input, &output).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("does-not-exist.png"));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_reports_encode_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("missing").join("output.png");
    RgbaImage::from_pixel(3, 3, Rgba([5, 5, 5, 255]))
        .save(&input)
        .unwrap();

    let err = remove_black_background(&input, &output).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Encode);
    assert!(err.to_string().contains(&output.display().to_string()));
    assert!(!output.exists());
}

#[test]
fn test_output_is_png_whatever_the_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.jpg");
    RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]))
        .save(&input)
        .unwrap();

    remove_black_background(&input, &output).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
}

#[test]
fn test_grayscale_input_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gray.png");
    let output = dir.path().join("gray_out.png");
    GrayImage::from_fn(3, 2, |x, _| Luma([if x == 0 { 0 } else { 128 }]))
        .save(&input)
        .unwrap();

    let config = RemoveConfig::new(&input, &output);
    let summary = black_remover::remove_black_background_with_config(&config).unwrap();
    assert_eq!(summary.replaced_pixels, 2);

    let result = image::open(&output).unwrap();
    assert!(result.color().has_alpha());

    let result = result.to_rgba8();
    assert_eq!(result.dimensions(), (3, 2));
    assert_eq!(*result.get_pixel(0, 1), TRANSPARENT);
    assert_eq!(*result.get_pixel(2, 1), Rgba([128, 128, 128, 255]));
}

#[test]
fn test_running_twice_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    let image = RgbaImage::from_fn(32, 8, |x, y| {
        let v = (x * 8 + y) as u8;
        Rgba([v % 20, v % 12, v % 9, if x % 2 == 0 { 255 } else { 60 }])
    });
    image.save(&input).unwrap();

    remove_black_background(&input, &first).unwrap();
    let summary = remove_black_background(&first, &second).unwrap();

    let first = image::open(&first).unwrap().to_rgba8();
    let second = image::open(&second).unwrap().to_rgba8();
    assert_eq!(first, second);
    // already transparent pixels are matched again but stay (0,0,0,0)
    assert!(summary.replaced_pixels > 0);
}
