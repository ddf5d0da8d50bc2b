//! # 图片编码
//!
//! 单张图片的 WebP 编码与原格式回退编码。
//!
//! ## 功能
//! - WebP: 有损，质量 0-100，固定最高压缩努力等级
//! - PNG 回退: 无损，最高压缩 + 自适应滤波（质量参数不参与）
//! - JPEG 回退: 有损，复用同一质量参数
//!
//! ## 依赖关系
//! - 被 `commands/images.rs` 调用
//! - 使用 `image` / `webp` crate

use std::fs;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;

use crate::error::{Result, WeboptError};

/// WebP 压缩努力等级 (0-6)，6 最慢但压缩率最高
const WEBP_METHOD: i32 = 6;

/// 读取并解码输入图片
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| WeboptError::ImageDecodeError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// 编码为有损 WebP 并写入 `output`，返回磁盘上的实测大小
pub fn encode_webp(img: &DynamicImage, quality: u8, output: &Path) -> Result<u64> {
    let rgba = img.to_rgba8();
    let encoder = webp::Encoder::from_rgba(&rgba, rgba.width(), rgba.height());

    let mut config = webp::WebPConfig::new().map_err(|_| WeboptError::ImageEncodeError {
        format: "webp".to_string(),
        path: output.display().to_string(),
        reason: "invalid encoder configuration".to_string(),
    })?;
    config.quality = quality as f32;
    config.method = WEBP_METHOD;

    let data = encoder
        .encode_advanced(&config)
        .map_err(|e| WeboptError::ImageEncodeError {
            format: "webp".to_string(),
            path: output.display().to_string(),
            reason: format!("{:?}", e),
        })?;

    fs::write(output, &*data).map_err(|e| WeboptError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })?;

    super::file_size(output)
}

/// 按原扩展名编码回退产物并写入 `output`，返回实测大小
///
/// PNG 走无损路径，质量参数被重新诠释为压缩配置；
/// 其余扩展名 (jpg/jpeg) 走有损 JPEG。
pub fn encode_fallback(
    img: &DynamicImage,
    extension: &str,
    quality: u8,
    output: &Path,
) -> Result<u64> {
    let mut buf = Vec::new();

    let encode_result = if extension == "png" {
        let encoder =
            PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
        img.write_with_encoder(encoder)
    } else {
        // JPEG 编码器不接受带 alpha 的像素格式，先转 RGB
        let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
        img.to_rgb8().write_with_encoder(encoder)
    };

    encode_result.map_err(|e| WeboptError::ImageEncodeError {
        format: extension.to_string(),
        path: output.display().to_string(),
        reason: e.to_string(),
    })?;

    fs::write(output, &buf).map_err(|e| WeboptError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })?;

    super::file_size(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sample_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([200, 40, 40, 255])))
    }

    #[test]
    fn test_encode_webp_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sample.webp");
        let size = encode_webp(&sample_image(), 85, &out).unwrap();
        assert!(out.exists());
        assert!(size > 0);
        assert_eq!(size, fs::metadata(&out).unwrap().len());
    }

    #[test]
    fn test_encode_fallback_png_and_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let img = sample_image();

        let png_out = dir.path().join("sample.png");
        let png_size = encode_fallback(&img, "png", 85, &png_out).unwrap();
        assert!(png_size > 0);

        let jpg_out = dir.path().join("sample.jpg");
        let jpg_size = encode_fallback(&img, "jpg", 85, &jpg_out).unwrap();
        assert!(jpg_size > 0);
    }

    #[test]
    fn test_load_image_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.png");
        fs::write(&bad, b"this is not an image").unwrap();
        assert!(matches!(
            load_image(&bad),
            Err(WeboptError::ImageDecodeError { .. })
        ));
    }
}
