// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::command::{OutputKind, VisParam};
use crate::domain::models::proxy_region::ProxyRegion;

/// 捕获请求
///
/// 描述一次捕获任务：目标URL、出口区域以及需要的输出类型。
/// 默认同时请求截图和HTML。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    /// 目标URL
    pub url: String,
    /// 代理出口区域
    pub region: ProxyRegion,
    /// 是否需要截图
    pub want_image: bool,
    /// 是否需要HTML（MHTML归档）
    pub want_html: bool,
}

impl CaptureRequest {
    /// 创建同时请求截图和HTML的捕获请求
    pub fn new(url: impl Into<String>, region: ProxyRegion) -> Self {
        Self {
            url: url.into(),
            region,
            want_image: true,
            want_html: true,
        }
    }

    /// 设置是否需要截图
    pub fn with_image(mut self, want_image: bool) -> Self {
        self.want_image = want_image;
        self
    }

    /// 设置是否需要HTML
    pub fn with_html(mut self, want_html: bool) -> Self {
        self.want_html = want_html;
        self
    }

    /// 按固定顺序（图片、MHTML）生成输出参数
    pub fn vis_params(&self) -> Vec<VisParam> {
        let mut params = Vec::with_capacity(2);
        if self.want_image {
            params.push(OutputKind::Image.into());
        }
        if self.want_html {
            params.push(OutputKind::Mhtml.into());
        }
        params
    }
}
