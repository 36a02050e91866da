//! Everything the page displays that isn't layout: sections, stats,
//! projects, skills and contact channels.

pub const SITE_TITLE: &str = "Jakub Łącki Portfolio";
pub const SITE_DESCRIPTION: &str = "Blockchain Architect & Full-Stack Developer - Building innovative Web3 applications and DeFi platforms";
pub const BRAND: &str = "Portfolio";
/// Served from `public/`.
pub const FAVICON: &str = "/favicon.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub label: &'static str,
    pub id: &'static str,
}

pub const NAV_SECTIONS: [NavSection; 4] = [
    NavSection {
        label: "About",
        id: "about",
    },
    NavSection {
        label: "Projects",
        id: "projects",
    },
    NavSection {
        label: "Skills",
        id: "skills",
    },
    NavSection {
        label: "Contact",
        id: "contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
}

impl Icon {
    /// Icon font class.
    pub fn class(self) -> &'static str {
        match self {
            Self::Github => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Mail => "not-italic",
        }
    }

    /// Text drawn inside the icon, for icons the font doesn't have.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Mail => "✉",
            Self::Github | Self::Linkedin => "",
        }
    }
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        value: "15+",
        label: "Projects",
    },
    Stat {
        value: "3+",
        label: "Years Experience",
    },
    Stat {
        value: "50+",
        label: "Happy Clients",
    },
];

pub struct CoreSkill {
    pub name: &'static str,
    /// Percent, 0..=100.
    pub level: u8,
}

pub const CORE_SKILLS: [CoreSkill; 4] = [
    CoreSkill {
        name: "Frontend Development",
        level: 90,
    },
    CoreSkill {
        name: "Backend Development",
        level: 85,
    },
    CoreSkill {
        name: "UI/UX Design",
        level: 75,
    },
    CoreSkill {
        name: "Database Design",
        level: 80,
    },
];

pub struct FeaturedProject {
    pub title: &'static str,
    pub summary: &'static str,
    /// Demo clip under `public/`. A placeholder is drawn without one.
    pub video: Option<&'static str>,
    pub features: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub whitepaper_url: &'static str,
    pub live_url: &'static str,
}

pub const FEATURED: FeaturedProject = FeaturedProject {
    title: "PolyFund",
    summary: "Decentralized crowdfunding platform operating on blockchain technology. PolyFund enables transparent financing of social and charitable projects with full on-chain transaction auditability and modular smart contract architecture.",
    video: None,
    features: &[
        "Transparent, on-chain fundraising with full auditability",
        "Modular smart contract architecture (governance, security, analytics)",
        "Advanced refund system and scheduled payouts",
        "Lightweight Core with delegation to specialized modules",
    ],
    tech: &[
        "Solidity",
        "Next.js",
        "TypeScript",
        "Ethereum",
        "Web3.js",
        "Tailwind CSS",
        "Smart Contracts",
        "IPFS",
    ],
    whitepaper_url: "https://poly-fund.vercel.app/whitepaper",
    live_url: "https://poly-fund.vercel.app",
};

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub code_url: &'static str,
    pub live_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS: [Project; 5] = [
    Project {
        title: "E-commerce Dashboard",
        description: "Complete admin dashboard for online store with sales analytics and product management system.",
        tech: &["Next.js", "TypeScript", "Prisma", "Chart.js"],
        code_url: "#",
        live_url: "#",
        featured: false,
    },
    Project {
        title: "Task Management App",
        description: "Team task management application with real-time collaboration and popular tool integrations.",
        tech: &["Vue.js", "Express", "MongoDB", "Socket.io"],
        code_url: "#",
        live_url: "#",
        featured: false,
    },
    Project {
        title: "AI Chat Bot",
        description: "Intelligent chatbot using artificial intelligence for customer service with OpenAI API integration.",
        tech: &["Python", "FastAPI", "OpenAI", "Redis"],
        code_url: "#",
        live_url: "#",
        featured: true,
    },
    Project {
        title: "Weather App",
        description: "Responsive weather application with geolocation, forecasts and beautiful animated weather graphics.",
        tech: &["React Native", "Redux", "Weather API", "Lottie"],
        code_url: "#",
        live_url: "#",
        featured: false,
    },
    Project {
        title: "Crypto Tracker",
        description: "Cryptocurrency tracking application with real-time charts and price alerts.",
        tech: &["React", "D3.js", "WebSocket", "CoinGecko API"],
        code_url: "#",
        live_url: "#",
        featured: false,
    },
];

pub const TECH_GRID: [&str; 8] = [
    "React",
    "Next.js",
    "TypeScript",
    "Node.js",
    "Python",
    "PostgreSQL",
    "MongoDB",
    "AWS",
];

pub struct ContactChannel {
    pub icon: Icon,
    pub title: &'static str,
    pub info: &'static str,
    pub link: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: Icon::Mail,
        title: "Email",
        info: "contact@example.com",
        link: "mailto:contact@example.com",
    },
    ContactChannel {
        icon: Icon::Github,
        title: "GitHub",
        info: "@username",
        link: "https://github.com/username",
    },
    ContactChannel {
        icon: Icon::Linkedin,
        title: "LinkedIn",
        info: "/in/username",
        link: "https://linkedin.com/in/username",
    },
];

pub const HERO_LINKS: [(Icon, &str); 3] = [
    (Icon::Github, "https://github.com/username"),
    (Icon::Linkedin, "https://linkedin.com/in/username"),
    (Icon::Mail, "mailto:contact@example.com"),
];

/// Stagger for list items revealed one after another, in milliseconds.
pub fn stagger_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_ids_are_anchor_friendly() {
        for section in NAV_SECTIONS {
            assert_eq!(section.id, section.label.to_lowercase().replace(' ', "-"));
        }
    }

    #[test]
    fn test_core_skill_levels() {
        assert!(CORE_SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_projects() {
        assert_eq!(PROJECTS.iter().filter(|p| p.featured).count(), 1);
        assert!(PROJECTS.iter().all(|p| !p.tech.is_empty()));
        assert_eq!(FEATURED.features.len(), 4);
    }

    #[test]
    fn test_icons_draw_something() {
        for icon in [Icon::Github, Icon::Linkedin, Icon::Mail] {
            assert!(
                icon.class().starts_with("devicon-") || !icon.glyph().is_empty(),
                "{icon:?} renders an empty box"
            );
        }
    }

    #[test]
    fn test_local_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in std::iter::once(FAVICON).chain(FEATURED.video) {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "missing {}", path.display());
        }
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_ms(0), 0);
        assert_eq!(stagger_ms(3), 300);
    }
}
