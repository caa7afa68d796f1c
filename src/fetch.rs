//! Supplementary data for the leaf display sections.
//!
//! Every display section (skills, timeline, project universe, freelance
//! showcase, gallery interests, music player) owns one remote JSON resource
//! and one compiled-in default. The contract is the same everywhere: render
//! the default first, make a single fetch attempt keyed by the current
//! language where the resource is localized, and keep the default unless
//! the response is OK, parses to the expected shape, and is non-empty.
//! These fetches are independent of the resolver and of each other, and a
//! failure is never surfaced to the user.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::i18n::Language;

/// Skill category buckets the skills grid is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Core,
    System,
    Tools,
    Other,
}

/// One bar of the skills grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 1-100
    pub level: u8,
    pub category: SkillCategory,
}

/// One entry of the work-history timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: Vec<String>,
    #[serde(default)]
    pub highlight: bool,
}

/// One card of the 3D project gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseProject {
    pub url: String,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub link: String,
}

/// One item of the freelance showcase wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelanceItem {
    pub image: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Text block for the interests gallery. Not localized; one fixed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interests {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Fetch one resource, falling back to the given default on any failure or
/// on a response the validator rejects. Exactly one attempt; no retry.
pub async fn fetch_or_default<T, F>(
    client: &reqwest::Client,
    name: &str,
    url: &str,
    default: T,
    is_valid: F,
) -> T
where
    T: DeserializeOwned,
    F: FnOnce(&T) -> bool,
{
    match try_fetch::<T>(client, url).await {
        Ok(value) if is_valid(&value) => value,
        Ok(_) => {
            debug!("Remote {} data is empty, keeping default", name);
            default
        }
        Err(e) => {
            debug!("Using default {} data: {:#}", name, e);
            default
        }
    }
}

async fn try_fetch<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to request {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Request to {} failed ({})", url, response.status());
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("Failed to parse response from {}", url))
}

async fn fetch_list<T: DeserializeOwned>(
    client: &reqwest::Client,
    name: &str,
    url: &str,
    default: Vec<T>,
) -> Vec<T> {
    fetch_or_default(client, name, url, default, |list: &Vec<T>| !list.is_empty()).await
}

/// Fetcher for all leaf-section resources. Each section method is a thin
/// instantiation of [`fetch_or_default`] with that section's endpoint and
/// compiled-in default.
pub struct SectionFetcher {
    client: reqwest::Client,
    config: Config,
}

impl SectionFetcher {
    pub fn new(client: reqwest::Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn skills(&self, lang: Language) -> Vec<Skill> {
        let url = self.config.localized_data_url("skills", lang);
        fetch_list(&self.client, "skills", &url, default_skills()).await
    }

    pub async fn experiences(&self, lang: Language) -> Vec<Experience> {
        let url = self.config.localized_data_url("experiences", lang);
        fetch_list(&self.client, "experiences", &url, default_experiences()).await
    }

    pub async fn universe_projects(&self, lang: Language) -> Vec<UniverseProject> {
        let url = self.config.localized_data_url("project_universe", lang);
        let default = default_universe_projects(&self.config);
        fetch_list(&self.client, "project universe", &url, default).await
    }

    pub async fn freelance_showcase(&self, lang: Language) -> Vec<FreelanceItem> {
        let url = self.config.localized_data_url("freelance_showcase", lang);
        let default = default_freelance_showcase(&self.config);
        fetch_list(&self.client, "freelance showcase", &url, default).await
    }

    pub async fn interests(&self) -> Interests {
        let url = self.config.data_url("interests");
        fetch_or_default(&self.client, "interests", &url, default_interests(), |_| true).await
    }

    pub async fn music_playlist(&self) -> Vec<String> {
        let url = self.config.data_url("music");
        fetch_list(&self.client, "music playlist", &url, default_music_playlist(&self.config)).await
    }
}

pub fn default_skills() -> Vec<Skill> {
    vec![
        Skill { name: "Unity 3D/2D".to_string(), level: 98, category: SkillCategory::Core },
        Skill { name: "C# / .NET".to_string(), level: 95, category: SkillCategory::Core },
        Skill { name: "Architecture (MVC/ECS)".to_string(), level: 90, category: SkillCategory::Core },
        Skill { name: "UI System / UGUI".to_string(), level: 95, category: SkillCategory::System },
        Skill { name: "Combat Systems".to_string(), level: 92, category: SkillCategory::System },
        Skill { name: "Performance Optimization".to_string(), level: 88, category: SkillCategory::System },
        Skill { name: "Odin Inspector".to_string(), level: 90, category: SkillCategory::Tools },
        Skill { name: "DOTween / PrimeTween".to_string(), level: 95, category: SkillCategory::Tools },
        Skill { name: "MemoryPack".to_string(), level: 85, category: SkillCategory::Tools },
        Skill { name: "Behavior Tree / AI".to_string(), level: 85, category: SkillCategory::Other },
        Skill { name: "Addressables / AssetBundles".to_string(), level: 80, category: SkillCategory::Other },
        Skill { name: "Shader / VFX".to_string(), level: 75, category: SkillCategory::Other },
    ]
}

pub fn default_experiences() -> Vec<Experience> {
    vec![
        Experience {
            company: "深圳聚光灯网络有限公司".to_string(),
            role: "《命骸》项目总程序".to_string(),
            period: "2023.12 - 至今".to_string(),
            highlight: true,
            description: vec![
                "担任项目总程序，编写超过8万行代码，负责从底层架构到上层玩法的全方位实现。".to_string(),
                "核心实现：复杂的连击战斗系统（状态机驱动）、高性能存档方案（MemoryPack）、模块化任务与对话系统。".to_string(),
                "性能优化：实现2D专用动画状态机（性能提升1000%），基于GPU渲染的伤害跳字。".to_string(),
                "工具链：编写大量编辑器扩展、数据编辑器及常用工具库。".to_string(),
            ],
        },
        Experience {
            company: "成都凯瑞游科技有限公司".to_string(),
            role: "Unity 游戏开发".to_string(),
            period: "2023.03 - 2023.12".to_string(),
            highlight: false,
            description: vec![
                "负责《命骸》PC外包程序开发，实现3D平台穿梭、手柄支持、战斗系统基础。".to_string(),
                "使用Spine插件实现横版2D游戏开发及其他手游维护。".to_string(),
                "负责Bug修复与功能拓展，与策划美术紧密配合。".to_string(),
            ],
        },
    ]
}

pub fn default_universe_projects(config: &Config) -> Vec<UniverseProject> {
    let image = |name: &str| format!("{}/assets/images/universe/{}.jpg", config.asset_base_url, name);
    vec![
        UniverseProject {
            url: image("proj_1"),
            title: "Project Alpha".to_string(),
            date: "2023.10".to_string(),
            tags: vec!["Unity ECS".to_string(), "DOTS".to_string()],
            description: "一个基于 Unity ECS 架构的高性能战斗演示，同屏支持 5000+ 单位渲染与逻辑运算。".to_string(),
            link: String::new(),
        },
        UniverseProject {
            url: image("proj_2"),
            title: "Project Beta".to_string(),
            date: "2023.08".to_string(),
            tags: vec!["Shader Graph".to_string(), "VFX".to_string()],
            description: "专注于次世代渲染效果的实验性项目，包含体积云、动态全局光照以及高度风格化的后处理效果。".to_string(),
            link: String::new(),
        },
        UniverseProject {
            url: image("proj_3"),
            title: "UI Design System".to_string(),
            date: "2023.05".to_string(),
            tags: vec!["UGUI".to_string(), "MVVM".to_string()],
            description: "一套高度可复用的 UI 框架，解耦了逻辑与视图，支持复杂动画状态管理与 Lua 热更接口。".to_string(),
            link: String::new(),
        },
        UniverseProject {
            url: image("proj_4"),
            title: "Shader Works".to_string(),
            date: "2023.02".to_string(),
            tags: vec!["HLSL".to_string(), "Compute Shader".to_string()],
            description: "基于 Compute Shader 的 GPU 粒子系统与流体模拟，优化了移动端的性能表现。".to_string(),
            link: String::new(),
        },
        UniverseProject {
            url: image("proj_5"),
            title: "Character Setup".to_string(),
            date: "2022.11".to_string(),
            tags: vec!["Animation".to_string(), "Rigging".to_string()],
            description: "复杂的角色 IK 与动画状态机设置，实现了脚部贴地、程序化瞄准与自然的布娃娃系统。".to_string(),
            link: String::new(),
        },
        UniverseProject {
            url: image("proj_6"),
            title: "Environment Art".to_string(),
            date: "2022.08".to_string(),
            tags: vec!["PCG".to_string(), "Terrain".to_string()],
            description: "程序化生成 (PCG) 地形与植被系统，通过噪声算法自动生成无限延伸的自然地貌。".to_string(),
            link: String::new(),
        },
    ]
}

pub fn default_freelance_showcase(config: &Config) -> Vec<FreelanceItem> {
    let image = |name: &str| format!("{}/assets/images/freelance/{}.jpg", config.asset_base_url, name);
    vec![
        FreelanceItem {
            image: image("showcase_1"),
            title: "战斗系统外包案例".to_string(),
            description: Some("状态机驱动的连击系统定制".to_string()),
        },
        FreelanceItem {
            image: image("showcase_2"),
            title: "UI 框架搭建".to_string(),
            description: Some("UGUI 全套界面与动效".to_string()),
        },
        FreelanceItem {
            image: image("showcase_3"),
            title: "性能优化专项".to_string(),
            description: None,
        },
    ]
}

pub fn default_interests() -> Interests {
    Interests {
        title: "兴趣爱好".to_string(),
        description: "喜欢动漫、二次元、游戏、宅。喜欢的动漫有：命运石之门，叛逆的鲁路修，游戏人生，\
                      进击的巨人，死亡笔记，为美好的世界献上祝福等等。非常期待能参与独立游戏开发。"
            .to_string(),
        tags: vec![
            "命运石之门".to_string(),
            "叛逆的鲁路修".to_string(),
            "游戏人生".to_string(),
            "进击的巨人".to_string(),
            "Steam独立游戏".to_string(),
            "二次元".to_string(),
        ],
    }
}

pub fn default_music_playlist(config: &Config) -> Vec<String> {
    vec![
        format!("{}/assets/audio/bgm_1.mp3", config.asset_base_url),
        format!("{}/assets/audio/bgm_2.mp3", config.asset_base_url),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            asset_base_url: "https://assets.example.com/public".to_string(),
            lang_store_path: ".portfolio_lang".to_string(),
            initial_url: None,
        }
    }

    #[test]
    fn test_default_skills_cover_every_category() {
        let skills = default_skills();
        assert!(!skills.is_empty());
        for category in [
            SkillCategory::Core,
            SkillCategory::System,
            SkillCategory::Tools,
            SkillCategory::Other,
        ] {
            assert!(skills.iter().any(|s| s.category == category));
        }
        assert!(skills.iter().all(|s| s.level >= 1 && s.level <= 100));
    }

    #[test]
    fn test_default_experiences_highlight_flagship_role() {
        let experiences = default_experiences();
        assert_eq!(experiences.len(), 2);
        assert!(experiences[0].highlight);
        assert!(!experiences[1].highlight);
        assert!(experiences.iter().all(|e| !e.description.is_empty()));
    }

    #[test]
    fn test_default_universe_projects_use_asset_base() {
        let projects = default_universe_projects(&test_config());
        assert_eq!(projects.len(), 6);
        assert!(projects
            .iter()
            .all(|p| p.url.starts_with("https://assets.example.com/public/assets/images/")));
    }

    #[test]
    fn test_skill_wire_format() {
        let json = r#"{ "name": "Unity 3D/2D", "level": 98, "category": "Core" }"#;
        let skill: Skill = serde_json::from_str(json).expect("deserialize");
        assert_eq!(skill.category, SkillCategory::Core);
    }

    #[test]
    fn test_experience_highlight_defaults_to_false() {
        let json = r#"{
            "company": "Studio",
            "role": "Engineer",
            "period": "2022 - 2023",
            "description": ["Shipped the game"]
        }"#;
        let experience: Experience = serde_json::from_str(json).expect("deserialize");
        assert!(!experience.highlight);
    }

    #[test]
    fn test_malformed_skill_list_is_rejected_by_parser() {
        let json = r#"[{ "name": "Unity", "level": "not a number", "category": "Core" }]"#;
        assert!(serde_json::from_str::<Vec<Skill>>(json).is_err());
    }
}
