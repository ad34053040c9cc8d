// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 代理出口区域
///
/// 捕获流量经由的地理出口位置。服务端通过显示名称识别区域。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyRegion {
    /// 迪拜
    Dubai,
    /// 圣保罗
    SaoPaulo,
    /// 法兰克福
    Frankfurt,
    /// 新加坡
    Singapore,
    /// 纽约
    NewYorkCity,
    /// 约翰内斯堡
    Johannesburg,
}

/// 国家/地区代码到出口区域的映射表
///
/// 两位代码和三位代码（以及 `UAE`）指向同一区域，可互换使用。
pub const REGION_CODES: &[(&str, ProxyRegion)] = &[
    ("AE", ProxyRegion::Dubai),
    ("ARE", ProxyRegion::Dubai),
    ("UAE", ProxyRegion::Dubai),
    ("BR", ProxyRegion::SaoPaulo),
    ("BRA", ProxyRegion::SaoPaulo),
    ("DE", ProxyRegion::Frankfurt),
    ("DEU", ProxyRegion::Frankfurt),
    ("SG", ProxyRegion::Singapore),
    ("SGP", ProxyRegion::Singapore),
    ("US", ProxyRegion::NewYorkCity),
    ("USA", ProxyRegion::NewYorkCity),
    ("ZA", ProxyRegion::Johannesburg),
    ("ZAF", ProxyRegion::Johannesburg),
];

/// 未知区域代码错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown proxy region code: {0}")]
pub struct UnknownRegionCode(pub String);

impl ProxyRegion {
    /// 服务端使用的出口显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            ProxyRegion::Dubai => "Dubai",
            ProxyRegion::SaoPaulo => "Sao Paulo",
            ProxyRegion::Frankfurt => "Frankfurt",
            ProxyRegion::Singapore => "Singapore",
            ProxyRegion::NewYorkCity => "New York City",
            ProxyRegion::Johannesburg => "Johannesburg",
        }
    }

    /// 根据国家/地区代码查找区域，大小写不敏感
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        REGION_CODES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|(_, region)| *region)
    }

    /// 映射到该区域的所有代码
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        REGION_CODES
            .iter()
            .filter(move |(_, region)| region == self)
            .map(|(code, _)| *code)
    }
}

impl fmt::Display for ProxyRegion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProxyRegion {
    type Err = UnknownRegionCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProxyRegion::from_code(s).ok_or_else(|| UnknownRegionCode(s.to_string()))
    }
}
