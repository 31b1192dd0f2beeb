//! The page's data. Everything here is immutable literal content baked in at
//! build time.

use serde::Serialize;

pub const TITLE: &str = "Haashir Nawaz's Profolio";

pub const EMAIL: &str = "haashirn007@gmail.com";
pub const MAILTO: &str = "mailto:haashirn007@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/haashirnawaz9";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/haashir-nawaz-4aa006241/";
pub const PHONE_TEL: &str = "tel:+15165476312";
pub const PHONE_DISPLAY: &str = "(516) 547-6312";

#[derive(Clone, Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub blurb: &'static str,
    pub availability: &'static str,
    pub location: &'static str,
}

pub fn profile() -> Profile {
    Profile {
        name: "Haashir Nawaz",
        tagline: "Crafting Digital Experiences with Code",
        blurb: "Front-End Software Engineer passionate about building innovative \
                web experiences that combine beautiful design with powerful \
                functionality.",
        availability: "Available for freelance projects and full-time opportunities",
        location: "Based in West Babylon, NY • Available Worldwide",
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub blurb: &'static str,
    pub stack: &'static [&'static str],
    pub url: &'static str,
    /// Spans the full grid width (the closing feature card).
    pub wide: bool,
}

pub fn projects() -> &'static [Project] {
    static PROJECTS: [Project; 3] = [
        Project {
            title: "HashChat AI",
            subtitle: "AI-Powered Chat Platform",
            blurb: "A sophisticated chat application leveraging advanced AI for \
                    natural conversations and instant responses.",
            stack: &["Next.js", "OpenAI", "TailwindCSS"],
            url: "https://hashchat-ai.vercel.app/",
            wide: false,
        },
        Project {
            title: "ImageGen AI",
            subtitle: "AI Image Generation Platform",
            blurb: "Transform text prompts into stunning AI-generated artwork with \
                    this innovative platform.",
            stack: &["Next.js", "Clerk", "Prisma"],
            url: "https://imagegenaii.netlify.app/",
            wide: false,
        },
        Project {
            title: "Masjid-e-Khazra",
            subtitle: "Community Platform",
            blurb: "A comprehensive community platform featuring event management, \
                    seating arrangements, and organizational tools built with \
                    modern web technologies.",
            stack: &["Next.js", "TailwindCSS", "MongoDB"],
            url: "https://masjid-e-khazra.netlify.app/",
            wide: true,
        },
    ];
    &PROJECTS
}

#[derive(Clone, Debug, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub fn skill_groups() -> &'static [SkillGroup] {
    static GROUPS: [SkillGroup; 4] = [
        SkillGroup {
            title: "Frontend",
            skills: &["React", "Next.js", "TypeScript", "TailwindCSS", "React Native"],
        },
        SkillGroup {
            title: "Backend",
            skills: &["Node.js", "Express", "REST APIs", "GraphQL"],
        },
        SkillGroup {
            title: "Database",
            skills: &["MongoDB", "Prisma", "Supabase", "PostgreSQL"],
        },
        SkillGroup {
            title: "Tools",
            skills: &["Git", "VS Code", "Vercel", "Netlify"],
        },
    ];
    &GROUPS
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn contact_links() -> &'static [ContactLink] {
    static LINKS: [ContactLink; 3] = [
        ContactLink {
            label: EMAIL,
            href: MAILTO,
        },
        ContactLink {
            label: "LinkedIn",
            href: LINKEDIN_URL,
        },
        ContactLink {
            label: PHONE_DISPLAY,
            href: PHONE_TEL,
        },
    ];
    &LINKS
}
