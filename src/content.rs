//! Content document schema, compiled-in defaults, and the overlay merge.
//!
//! `ContentDocument` is the full structured text content for the site, keyed
//! by section. Every declared field is present on the type (optionals only
//! where the wire format itself is optional), so any value of this type
//! satisfies the schema-completeness guarantee: no section a consumer reads
//! can ever be missing, regardless of what a remote bundle omitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Navigation bar labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSection {
    pub home: String,
    pub minghai: String,
    pub skills: String,
    pub experience: String,
    pub freelance: String,
}

/// Hero banner text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    pub role: String,
    pub title: String,
    pub tagline: String,
    pub summary: String,
    pub cta_project: String,
    pub cta_contact: String,
    pub scroll: String,
}

/// A named node in a feature diagram (dialog/quest system write-ups).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureNode {
    pub name: String,
    pub desc: String,
}

/// One slide of the save-system presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSystemSlide {
    pub title: String,
    pub desc: String,
    pub points: Vec<String>,
    #[serde(rename = "techTag", default, skip_serializing_if = "Option::is_none")]
    pub tech_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideNav {
    pub prev: String,
    pub next: String,
}

/// The save-system feature write-up nested inside the flagship project section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSystemDetail {
    pub title: String,
    pub subtitle: String,
    pub slides: Vec<SaveSystemSlide>,
    pub nav: SlideNav,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogSystemNodes {
    pub config: FeatureNode,
    pub logic: FeatureNode,
    pub action: FeatureNode,
    pub eval: FeatureNode,
}

/// The dialog-system feature write-up nested inside the flagship project section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogSystemDetail {
    pub title: String,
    pub subtitle: String,
    pub nodes: DialogSystemNodes,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestSystemNodes {
    #[serde(rename = "static")]
    pub static_data: FeatureNode,
    pub runtime: FeatureNode,
    pub logic: FeatureNode,
    pub event: FeatureNode,
}

/// The quest-system feature write-up nested inside the flagship project section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestSystemDetail {
    pub title: String,
    pub subtitle: String,
    pub nodes: QuestSystemNodes,
    pub highlights: Vec<String>,
}

/// Flagship project ("Minghai") section, including the nested feature
/// write-ups. The nested sub-documents are exactly why the merge is
/// shallow-per-section: a bundle that only overrides `title` must not wipe
/// out `saveSystem` living alongside it under the same top-level key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinghaiSection {
    pub subtitle: String,
    pub title: String,
    pub video_label: String,
    pub desc_html: String,
    pub steam_btn: String,
    pub internal_btn: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    #[serde(rename = "saveSystem")]
    pub save_system: SaveSystemDetail,
    #[serde(rename = "dialogSystem")]
    pub dialog_system: DialogSystemDetail,
    #[serde(rename = "questSystem", default, skip_serializing_if = "Option::is_none")]
    pub quest_system: Option<QuestSystemDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsSection {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSection {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelanceSection {
    pub title: String,
    pub title_highlight: String,
    pub desc: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseSection {
    pub title: String,
    pub subtitle: String,
    pub drag_hint: String,
    pub view_btn: String,
    pub internal_btn: String,
    pub locked_btn: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GallerySection {
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    pub title: String,
    pub desc: String,
}

/// The full structured text content for the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub nav: NavSection,
    pub hero: HeroSection,
    pub minghai: MinghaiSection,
    pub skills: SkillsSection,
    pub experience: ExperienceSection,
    pub freelance: FreelanceSection,
    pub universe: UniverseSection,
    pub gallery: GallerySection,
    pub footer: FooterSection,
}

impl ContentDocument {
    /// The compiled-in default document (Chinese, the default locale).
    ///
    /// This is the known-good document the resolver seeds its state with
    /// before any network activity, and the document it resets to when a
    /// fetch for the default language fails.
    pub fn compiled_default() -> ContentDocument {
        ContentDocument {
            nav: NavSection {
                home: "首页".to_string(),
                minghai: "命骸项目".to_string(),
                skills: "技能".to_string(),
                experience: "经历".to_string(),
                freelance: "外包".to_string(),
            },
            hero: HeroSection {
                role: "资深 Unity 游戏开发工程师".to_string(),
                title: "用代码构建游戏世界".to_string(),
                tagline: "3800+ 问题解决专家 | 命骸项目主程 | 极致性能优化".to_string(),
                summary: "丰富的2D/3D游戏制作经验，主导开发过《命骸》等复杂项目，\
                          拥有极强的Debug能力与架构设计思维。"
                    .to_string(),
                cta_project: "查看主力项目".to_string(),
                cta_contact: "联系我".to_string(),
                scroll: "向下滚动".to_string(),
            },
            minghai: MinghaiSection {
                subtitle: "主力项目".to_string(),
                title: "《命骸》".to_string(),
                video_label: "宣传片".to_string(),
                desc_html: "担任项目总程序，编写超过8万行代码，负责从底层架构到上层玩法的全方位实现。"
                    .to_string(),
                steam_btn: "Steam 页面".to_string(),
                internal_btn: "查看技术细节".to_string(),
                features: vec![
                    "MemoryPack 高性能存档框架".to_string(),
                    "自定义 2D 动画状态机 (10x 性能)".to_string(),
                    "复杂连击与打击感调校系统".to_string(),
                    "基于行为树的 Boss AI".to_string(),
                    "AssetBundle 资源加密系统".to_string(),
                    "高度模块化的任务/对话系统".to_string(),
                ],
                tags: vec![
                    "Unity".to_string(),
                    "C#".to_string(),
                    "2D ARPG".to_string(),
                ],
                save_system: SaveSystemDetail {
                    title: "高性能存档方案".to_string(),
                    subtitle: "基于 MemoryPack 的二进制序列化框架".to_string(),
                    slides: vec![
                        SaveSystemSlide {
                            title: "架构总览".to_string(),
                            desc: "存档数据按模块拆分，统一由存档中心调度。".to_string(),
                            points: vec![
                                "模块化存档单元".to_string(),
                                "异步写入，不阻塞主线程".to_string(),
                            ],
                            tech_tag: Some("MemoryPack".to_string()),
                        },
                        SaveSystemSlide {
                            title: "版本兼容".to_string(),
                            desc: "旧档升级通过版本迁移链完成。".to_string(),
                            points: vec!["向后兼容的字段演进".to_string()],
                            tech_tag: None,
                        },
                    ],
                    nav: SlideNav {
                        prev: "上一页".to_string(),
                        next: "下一页".to_string(),
                    },
                },
                dialog_system: DialogSystemDetail {
                    title: "模块化对话系统".to_string(),
                    subtitle: "配置、逻辑、行为与求值解耦的节点化设计".to_string(),
                    nodes: DialogSystemNodes {
                        config: FeatureNode {
                            name: "配置节点".to_string(),
                            desc: "策划可编辑的对话数据表".to_string(),
                        },
                        logic: FeatureNode {
                            name: "逻辑节点".to_string(),
                            desc: "分支与条件判断".to_string(),
                        },
                        action: FeatureNode {
                            name: "行为节点".to_string(),
                            desc: "触发演出与游戏事件".to_string(),
                        },
                        eval: FeatureNode {
                            name: "求值节点".to_string(),
                            desc: "运行时变量求值".to_string(),
                        },
                    },
                    highlights: vec![
                        "热更新友好".to_string(),
                        "与任务系统共享条件求值".to_string(),
                    ],
                },
                quest_system: None,
            },
            skills: SkillsSection {
                title: "技能矩阵".to_string(),
                subtitle: "核心能力与工具链".to_string(),
            },
            experience: ExperienceSection {
                title: "工作经历".to_string(),
            },
            freelance: FreelanceSection {
                title: "外包".to_string(),
                title_highlight: "战士".to_string(),
                desc: "闲鱼平台 Unity 领域，累计解决 3800+ 技术难题。".to_string(),
                tags: vec![
                    "Bug 修复".to_string(),
                    "性能优化".to_string(),
                    "架构咨询".to_string(),
                ],
            },
            universe: UniverseSection {
                title: "项目宇宙".to_string(),
                subtitle: "拖拽浏览历年项目".to_string(),
                drag_hint: "拖拽旋转".to_string(),
                view_btn: "查看".to_string(),
                internal_btn: "内部项目".to_string(),
                locked_btn: "暂未公开".to_string(),
            },
            gallery: GallerySection {
                quote: "热爱游戏，也热爱创造游戏。".to_string(),
            },
            footer: FooterSection {
                title: "保持联系".to_string(),
                desc: "期待与你一起做出好玩的游戏。".to_string(),
            },
        }
    }
}

impl Default for ContentDocument {
    fn default() -> Self {
        ContentDocument::compiled_default()
    }
}

/// Merge a fetched overlay onto the current document, one level deep per
/// top-level section.
///
/// For each top-level key present in the overlay: if both sides are JSON
/// objects, fields present in the overlay overwrite and fields absent keep
/// their current value (sub-objects nested deeper are preserved wholesale
/// when absent, replaced wholesale when present). Lists and scalars replace
/// outright. Sections absent from the overlay are untouched, and keys the
/// schema does not declare are ignored.
///
/// Returns `None` when the overlay is not a JSON object or the merged result
/// no longer satisfies the schema; callers treat that the same as a failed
/// fetch.
pub fn merge_overlay(current: &ContentDocument, overlay: &Value) -> Option<ContentDocument> {
    let overlay_map = overlay.as_object()?;

    let mut base = serde_json::to_value(current).ok()?;
    let base_map = base.as_object_mut()?;

    for (key, fetched) in overlay_map {
        match (base_map.get_mut(key), fetched) {
            (Some(Value::Object(current_section)), Value::Object(fetched_section)) => {
                for (field, value) in fetched_section {
                    current_section.insert(field.clone(), value.clone());
                }
            }
            (Some(slot), value) => {
                *slot = value.clone();
            }
            // Unknown top-level keys in the bundle are not part of the schema
            (None, _) => {}
        }
    }

    serde_json::from_value(base).ok()
}
