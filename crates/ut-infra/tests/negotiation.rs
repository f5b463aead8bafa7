//! End-to-end negotiation over the real adapters.

use std::sync::Arc;

use ut_core::transfer::{names, Flavor, FlavorCandidate, FormatClass, Negotiator, RasterImage};
use ut_core::TransferError;
use ut_infra::{AtomInterner, ImageCodec, StandardEncodings};

fn negotiator() -> Negotiator {
    Negotiator::new(
        Arc::new(AtomInterner::new()),
        Arc::new(ImageCodec::new()),
        Arc::new(StandardEncodings),
    )
}

fn opaque_image() -> RasterImage {
    let mut rgba = Vec::with_capacity(10 * 10 * 4);
    for i in 0..100u32 {
        rgba.extend_from_slice(&[(i % 256) as u8, 80, 160, 255]);
    }
    RasterImage::from_rgba8(10, 10, rgba).unwrap()
}

#[test]
fn test_image_png_native_offers_abstract_image_first() {
    let negotiator = negotiator();
    let flavors = negotiator.flavors_for_native("image/png");

    assert_eq!(flavors.len(), 2);
    assert!(matches!(
        &flavors[0],
        FlavorCandidate::Flavor(flavor) if flavor.is_abstract_image()
    ));
    assert!(matches!(
        &flavors[1],
        FlavorCandidate::Flavor(flavor) if flavor.base_type() == "image/png"
    ));
}

#[test]
fn test_abstract_image_flavor_maps_to_encodable_formats() {
    let negotiator = negotiator();
    let natives = negotiator.natives_for_flavor(&Flavor::image());

    assert!(natives.contains(&"image/png".to_string()));
    assert!(natives.contains(&"image/jpeg".to_string()));

    // Every offered native must round back to a decodable image flavor.
    for native in &natives {
        assert!(
            !negotiator.flavors_for_native(native).is_empty(),
            "{native} offered but not translatable back"
        );
    }
}

#[test]
fn test_string_flavor_expands_to_standard_encodings() {
    let negotiator = negotiator();
    let natives = negotiator.natives_for_flavor(&Flavor::string());

    assert!(natives.contains(&"text/plain;charset=UTF-8".to_string()));
    assert_eq!(natives.last(), Some(&"text/plain".to_string()));
}

#[test]
fn test_classification_matches_negotiation() {
    let negotiator = negotiator();

    let png = negotiator.native_id(names::PNG);
    assert_eq!(negotiator.classify(png), FormatClass::Image);

    let files = negotiator.native_id(names::FILE_NAME);
    assert_eq!(negotiator.classify(files), FormatClass::FileList);

    let text = negotiator.native_id("text/plain;charset=utf-8");
    assert_eq!(negotiator.classify(text), FormatClass::Text);
}

#[test]
fn test_png_round_trip_preserves_opaque_pixels() {
    let negotiator = negotiator();
    let id = negotiator.native_id(names::PNG);
    let original = opaque_image();

    let bytes = negotiator.encode_image(&original, id).unwrap();
    let decoded = negotiator.decode_image(&bytes, id).unwrap();

    assert_eq!(decoded.width(), original.width());
    assert_eq!(decoded.height(), original.height());
    assert_eq!(decoded.rgba(), original.rgba());
}

#[test]
fn test_jfif_round_trip_preserves_dimensions() {
    let negotiator = negotiator();
    let id = negotiator.native_id(names::JFIF);

    let bytes = negotiator.encode_image(&opaque_image(), id).unwrap();
    let decoded = negotiator.decode_image(&bytes, id).unwrap();

    assert_eq!(decoded.width(), 10);
    assert_eq!(decoded.height(), 10);
}

#[test]
fn test_unresolvable_native_reports_its_name() {
    let negotiator = negotiator();
    let id = negotiator.native_id("TARGETS");

    match negotiator.encode_image(&opaque_image(), id) {
        Err(TransferError::TranslationUnsupported { native }) => {
            assert_eq!(native, "TARGETS")
        }
        other => panic!("expected TranslationUnsupported, got {other:?}"),
    }
}
