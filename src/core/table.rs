use std::collections::HashMap;

/// Localized names shipped with flatkey.
pub const BUILTIN_TRANSLATIONS: &[(&str, &str)] = &[
    ("certifications", "认证"),
    ("authorityIconCdn", "认证机构图标CDN"),
    ("thumbUrl", "缩略图URL"),
    ("url", "URL"),
    ("authorityIconUrl", "认证机构图标URL"),
    ("info", "信息"),
    ("annexeName", "附件名称"),
    ("annexeUrl", "附件URL"),
    ("authorityId", "认证机构ID"),
    ("authorityName", "认证机构名称"),
    ("certNO", "证书编号"),
    ("epdOwner", "EPD所有者"),
    ("epdPublisher", "EPD发布者"),
    ("productCategoryRule", "产品类别规则"),
    ("type", "类型"),
    ("verificationCriteria", "验证标准"),
    ("verifiedAt", "验证于"),
    ("conclusion", "结论"),
    ("calcBeginAt", "计算开始于"),
    ("calcEndAt", "计算结束于"),
    ("carbonStorage", "碳储存"),
    ("descriptions", "描述"),
    ("inputType", "输入类型"),
    ("pcfTotal", "PCF总量"),
    ("pcfUnit", "PCF单位"),
    ("sysBoundary", "系统边界"),
    ("org", "组织"),
    ("id", "ID"),
    ("name", "名称"),
    ("region", "地区"),
    ("socialCreditCode", "社会信用代码"),
    ("product", "产品"),
    ("category", "类别"),
    ("code", "代码"),
    ("imgCdn", "图片CDN"),
    ("imgUrl", "图片URL"),
    ("referenceFlow", "参考流程"),
    ("regionId", "地区ID"),
    ("regionName", "地区名称"),
    ("spec", "规格"),
    ("unit", "单位"),
    ("unitDescType", "单位描述类型"),
    ("cewChainInfo", "链信息"),
    ("blockHeight", "区块高度"),
    ("blockHash", "区块哈希"),
    ("transactionHash", "交易哈希"),
    ("createdAt", "创建于"),
    ("disclosureEN", "英文披露"),
    ("disclosureZH", "中文披露"),
    ("showCarbonLabel", "显示碳标签"),
    ("isPrivate", "是否私有"),
    ("accessPassword", "访问密码"),
    ("needPassword", "需要密码"),
    ("platforms", "平台"),
    ("seoPlatform", "SEO平台"),
    ("pageViewTotal", "页面总浏览量"),
    ("status", "状态"),
    ("pinnedAt", "置顶于"),
    ("updatedAt", "更新于"),
    ("publishedAt", "发布于"),
    ("creator", "创建者"),
    ("updater", "更新者"),
    ("publisher", "发布者"),
    ("orgId", "组织ID"),
];

/// Mapping from a bare segment name to its localized display name.
///
/// Built once and handed to [`KeyTranslator`](super::KeyTranslator); never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dictionary compiled into the binary.
    pub fn builtin() -> Self {
        BUILTIN_TRANSLATIONS.iter().copied().collect()
    }

    /// Look up the localized name of a segment.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Add every entry of `other`, replacing names already present.
    pub fn merge(mut self, other: TranslationTable) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
