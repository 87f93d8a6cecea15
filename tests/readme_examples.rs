//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_core_api() {
    use splashbin::{Frame, composite_preview, device_to_rgba, rgba_to_device};

    let top_bin = vec![0u8; 288_000];
    let bottom_bin = vec![0u8; 230_400];

    let top = device_to_rgba(Frame::new(&top_bin)).unwrap();
    let bottom = device_to_rgba(Frame::new(&bottom_bin)).unwrap();
    assert_eq!((top.width(), top.height()), (400, 240));
    assert_eq!((bottom.width(), bottom.height()), (320, 240));

    let preview = composite_preview(&[top.as_frame(), bottom.as_frame()]).unwrap();
    assert_eq!((preview.width(), preview.height()), (400, 480));

    let packed = rgba_to_device(top.as_frame()).unwrap();
    assert_eq!(packed.data(), &top_bin[..]);
}

#[test]
fn readme_slices() {
    use splashbin::bytes;

    let splash = vec![0u8; 230_400];
    let mut rgba = vec![0u8; 307_200];
    bytes::device_to_rgba(&splash, &mut rgba, 320, 240).unwrap();
    assert_eq!(&rgba[..4], &[0, 0, 0, 255]);
}

#[cfg(feature = "rgb")]
#[test]
fn readme_typed_rgb() {
    use rgb::Rgba;
    use splashbin::{Frame, device_to_rgba, typed_rgb};

    let bitmap = device_to_rgba(Frame::new(&[0u8; 230_400])).unwrap();
    let pixels: &[Rgba<u8>] = typed_rgb::rgba_pixels(&bitmap).unwrap();
    assert_eq!(pixels[0], Rgba::new(0, 0, 0, 255));
}

#[cfg(feature = "imgref")]
#[test]
fn readme_imgref() {
    use ::imgref::ImgVec;
    use rgb::Rgba;
    use splashbin::imgref;

    let img = ImgVec::new(vec![Rgba::new(255, 0, 128, 200); 400 * 240], 400, 240);
    let device = imgref::img_to_device(img.as_ref()).unwrap();
    assert_eq!(&device.data()[..3], &[128, 0, 255]);
}

#[cfg(feature = "png")]
#[test]
fn readme_png() {
    use splashbin::{Frame, png};

    let top = vec![0u8; 384_000];
    let bottom = vec![0u8; 307_200];
    let img = png::preview_to_image(&[Frame::new(&top), Frame::new(&bottom)]).unwrap();
    let encoded = png::encode_png(&img).unwrap();
    assert_eq!(&encoded[..8], b"\x89PNG\r\n\x1a\n");
}
