use std::io::Cursor;

use super::*;
use crate::foundation::core::{PixelSize, Rgba8Premul};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "mockup_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_png(path: &Path, w: u32, h: u32, rgba: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, &buf).unwrap();
}

fn solid(w: u32, h: u32, a: u8) -> Surface {
    Surface::filled(
        PixelSize::new(w, h).unwrap(),
        Rgba8Premul::from_straight_rgba(255, 255, 255, a),
    )
}

fn key() -> SceneKey {
    SceneKey::new(ProductCode::Pillow, "1")
}

#[test]
fn load_reads_manifest_and_images() {
    let tmp = temp_dir("scenes_load");
    std::fs::create_dir_all(tmp.join("img")).unwrap();
    write_png(&tmp.join("img/bg.png"), 6, 4, [200, 190, 180, 255]);
    write_png(&tmp.join("img/mask.png"), 6, 4, [0, 0, 0, 128]);
    std::fs::write(
        tmp.join(MANIFEST_FILE),
        r#"{"scenes":[{"product":"PI","name":"1","background":"img/bg.png","mask":"./img/mask.png","insert_width_px":5}]}"#,
    )
    .unwrap();

    let catalog = SceneCatalog::load(&tmp).unwrap();
    assert_eq!(catalog.len(), 1);
    let scene = catalog.get(&key()).unwrap();
    assert_eq!(scene.background().size(), PixelSize::new(6, 4).unwrap());
    assert_eq!(scene.mask().get(3, 2), 128);
    assert!(scene.shadow().is_none());
    assert_eq!(scene.insert_width_px(), 5);

    std::fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn missing_manifest_or_image_is_an_asset_error() {
    let tmp = temp_dir("scenes_missing");
    std::fs::create_dir_all(&tmp).unwrap();
    assert!(matches!(
        SceneCatalog::load(&tmp),
        Err(MockupError::Asset(_))
    ));

    std::fs::write(
        tmp.join(MANIFEST_FILE),
        r#"{"scenes":[{"product":"PI","name":"1","background":"bg.png","mask":"mask.png","insert_width_px":5}]}"#,
    )
    .unwrap();
    let err = SceneCatalog::load(&tmp).unwrap_err();
    assert!(matches!(err, MockupError::Asset(_)));
    assert!(err.to_string().contains("bg.png"), "{err}");

    std::fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn malformed_manifest_is_rejected() {
    let tmp = temp_dir("scenes_bad_manifest");
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(tmp.join(MANIFEST_FILE), r#"{"scenes":[{"product":"XX"}]}"#).unwrap();
    assert!(matches!(
        SceneCatalog::load(&tmp),
        Err(MockupError::Asset(_))
    ));
    std::fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn mismatched_layers_are_rejected() {
    let err = SceneAsset::new(key(), solid(6, 4, 255), &solid(5, 4, 255), None, 3).unwrap_err();
    assert!(matches!(err, MockupError::Asset(_)));

    let err = SceneAsset::new(
        key(),
        solid(6, 4, 255),
        &solid(6, 4, 255),
        Some(solid(6, 5, 10)),
        3,
    )
    .unwrap_err();
    assert!(err.to_string().contains("shadow"), "{err}");

    assert!(SceneAsset::new(key(), solid(6, 4, 255), &solid(6, 4, 255), None, 0).is_err());
}

#[test]
fn unknown_key_is_an_input_error() {
    let mut catalog = SceneCatalog::new();
    catalog.insert(SceneAsset::new(key(), solid(4, 4, 255), &solid(4, 4, 255), None, 2).unwrap());

    let err = catalog
        .get(&SceneKey::new(ProductCode::Pillow, "2"))
        .unwrap_err();
    assert!(matches!(err, MockupError::UnknownScene(_)));
    assert!(err.is_input_error());
    assert_eq!(catalog.keys(), vec![key()]);
}

#[test]
fn shared_templates_are_not_copied() {
    let mut catalog = SceneCatalog::new();
    catalog.insert(SceneAsset::new(key(), solid(4, 4, 255), &solid(4, 4, 255), None, 2).unwrap());
    let a = catalog.get(&key()).unwrap();
    let b = catalog.clone().get(&key()).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn normalize_rel_path_rules() {
    assert_eq!(normalize_rel_path("a\\b/./c.png").unwrap(), "a/b/c.png");
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("../up.png").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn bundled_catalog_has_the_pillow_scene() {
    let catalog = SceneCatalog::bundled().unwrap();
    let scene = catalog.get(&key()).unwrap();
    assert!(scene.shadow().is_some());
    assert!(scene.insert_width_px() > 0);
}
