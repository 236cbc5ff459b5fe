use image::{ImageBuffer, Rgb};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create a real, decodable PNG of a single colour
pub fn create_test_image(dir: &Path, name: &str, colour: [u8; 3]) -> PathBuf {
    // Ensure the directory exists before creating the file
    fs::create_dir_all(dir).unwrap();

    let file_path = dir.join(name);
    ImageBuffer::from_pixel(32, 48, Rgb(colour))
        .save_with_format(&file_path, image::ImageFormat::Png)
        .unwrap();
    file_path
}

/// Create a file that only looks like an image by its name
pub fn create_dummy_file(dir: &Path, name: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();

    let file_path = dir.join(name);
    let mut file = File::create(&file_path).unwrap();
    file.write_all(b"NOT AN IMAGE").unwrap();
    file_path
}

/// Lay out a closet with `top_images` and `bottom_images` under `base_dir`
pub fn create_test_closet(base_dir: &Path) -> (PathBuf, PathBuf) {
    let tops = base_dir.join("top_images");
    let bottoms = base_dir.join("bottom_images");

    create_test_image(&tops, "red_shirt.png", [200, 20, 20]);
    create_test_image(&tops, "green_blouse.png", [20, 200, 20]);
    create_test_image(&tops, "blue_jumper.png", [20, 20, 200]);
    create_dummy_file(&tops, "notes.txt");

    create_test_image(&bottoms, "jeans.png", [30, 30, 120]);
    create_test_image(&bottoms, "skirt.png", [120, 30, 30]);

    (tops, bottoms)
}
