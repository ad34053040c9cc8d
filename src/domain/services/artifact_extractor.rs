// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 捕获归档解析
//!
//! 捕获服务生成的ZIP归档在固定路径下保存截图和MHTML归档。
//! 所有函数只处理内存中的字节，不依赖网络或任务状态。

use crate::utils::errors::HarvesterError;
use mailparse::{body::Body, MailHeaderMap, ParsedMail};
use std::io::{Cursor, Read};
use tracing::{debug, warn};
use zip::result::ZipError;
use zip::ZipArchive;

/// 归档中截图的路径
pub const PNG_ARCHIVE_PATH: &str = "contents/output.png";

/// 归档中MHTML文档的路径
pub const MHTML_ARCHIVE_PATH: &str = "contents/output.mhtml";

/// MHTML顶层头，记录触发捕获的原始地址
pub const MHTML_ORIGINAL_SOURCE_HEADER: &str = "Snapshot-Content-Location";

/// MHTML各部分的位置头
pub const MHTML_CONTENT_LOCATION: &str = "Content-Location";

/// 主HTML部分的内容类型
pub const MHTML_HTML_CONTENT_TYPE: &str = "text/html";

/// 预分配缓冲区的上限（16 MiB）
const MAX_CAPACITY_HINT: u64 = 16 * 1024 * 1024;

/// 读取归档中的指定成员
///
/// 成员不存在时返回 `Ok(None)`；归档在函数返回时释放。
fn read_member(zip_bytes: &[u8], path: &str) -> Result<Option<Vec<u8>>, ZipError> {
    let mut archive = ZipArchive::new(Cursor::new(zip_bytes))?;
    let mut member = match archive.by_name(path) {
        Ok(member) => member,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e),
    };

    // The declared size comes from the archive itself and is only a hint.
    let capacity = member.size().min(MAX_CAPACITY_HINT) as usize;
    let mut content = Vec::with_capacity(capacity);
    member.read_to_end(&mut content)?;
    Ok(Some(content))
}

/// 从捕获归档中提取截图
///
/// # 返回值
///
/// * `Ok(Some(bytes))` - 解压后的PNG数据
/// * `Ok(None)` - 归档中没有截图
/// * `Err(HarvesterError::Archive)` - 数据不是可读的ZIP归档
pub fn extract_image(zip_bytes: &[u8]) -> Result<Option<Vec<u8>>, HarvesterError> {
    let image = read_member(zip_bytes, PNG_ARCHIVE_PATH)?;
    if image.is_none() {
        debug!("No screenshot found in capture archive");
    }
    Ok(image)
}

/// 从捕获归档中提取主HTML文档
///
/// 解析MHTML归档，返回内容类型为 `text/html` 且位置头与原始地址一致的部分。
/// 任何失败（归档损坏、缺少头、没有匹配部分）都返回 `None`，从不报错。
pub fn extract_html(zip_bytes: &[u8]) -> Option<String> {
    let mhtml = match read_member(zip_bytes, MHTML_ARCHIVE_PATH) {
        Ok(Some(mhtml)) => mhtml,
        Ok(None) => {
            debug!("No MHTML document found in capture archive");
            return None;
        }
        Err(e) => {
            warn!("Unable to read capture archive: {}", e);
            return None;
        }
    };

    let mhtml = match String::from_utf8(mhtml) {
        Ok(text) => text,
        Err(e) => {
            warn!("MHTML document is not valid UTF-8: {}", e);
            return None;
        }
    };

    let html = html_from_mhtml(&mhtml);
    if html.is_none() {
        warn!("No HTML part matched the original capture location");
    }
    html
}

/// 从MHTML文本中找出主HTML部分
///
/// MHTML按邮件格式解析（RFC 2557）。只检查顶层的各个部分，
/// 返回第一个匹配部分的原始载荷，不做传输编码解码。
pub fn html_from_mhtml(mhtml: &str) -> Option<String> {
    let document = match mailparse::parse_mail(mhtml.as_bytes()) {
        Ok(document) => document,
        Err(e) => {
            warn!("Unable to parse MHTML document: {}", e);
            return None;
        }
    };

    let original_source = document
        .headers
        .get_first_value(MHTML_ORIGINAL_SOURCE_HEADER)?;

    document
        .subparts
        .iter()
        .find(|part| is_primary_html(part, &original_source))
        .and_then(|part| raw_payload(part))
}

fn is_primary_html(part: &ParsedMail, original_source: &str) -> bool {
    part.ctype.mimetype == MHTML_HTML_CONTENT_TYPE
        && part
            .headers
            .get_first_value(MHTML_CONTENT_LOCATION)
            .is_some_and(|location| location == original_source)
}

fn raw_payload(part: &ParsedMail) -> Option<String> {
    let raw = match part.get_body_encoded() {
        Body::Base64(body) | Body::QuotedPrintable(body) => body.get_raw(),
        Body::SevenBit(body) | Body::EightBit(body) => body.get_raw(),
        Body::Binary(body) => body.get_raw(),
    };
    // The line break before the next boundary belongs to the delimiter (RFC 2046).
    let raw = raw
        .strip_suffix(b"\r\n")
        .or_else(|| raw.strip_suffix(b"\n"))
        .unwrap_or(raw);
    String::from_utf8(raw.to_vec()).ok()
}

#[cfg(test)]
#[path = "artifact_extractor_test.rs"]
mod tests;
