//! The read-only dataset the page is rendered from.
//!
//! Everything here is rendered verbatim. A JSON file with the same shape can replace the built-in
//! content with `--content`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures loading a content file.
pub enum ContentError {
    /// The file could not be read.
    #[error("reading content file: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid content JSON.
    #[error("parsing content file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Everything shown on the page.
pub struct Content {
    /// Hero and about-me text.
    pub profile: Profile,
    /// Skill bars, in display order.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Project cards, in display order.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Blog excerpts, newest first.
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Contact details.
    pub contact: Contact,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Owner of the portfolio.
pub struct Profile {
    /// Display name.
    pub name: String,
    /// One-line strapline under the name.
    pub tagline: String,
    /// About-me paragraphs.
    #[serde(default)]
    pub about: Vec<String>,
    /// Quick-fact bullet points.
    #[serde(default)]
    pub facts: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// One skill bar.
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Proficiency percentage, 0 to 100.
    pub level: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// One project card.
pub struct Project {
    /// Card title.
    pub title: String,
    /// Card body.
    pub description: String,
    /// Screenshot reference, shown as a caption.
    pub image_ref: String,
    /// Source repository URL.
    pub repository_link: String,
    /// Live demo URL.
    pub demo_link: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// One blog excerpt.
pub struct Post {
    /// Post title.
    pub title: String,
    /// Teaser text.
    pub excerpt: String,
    /// Publication date as written.
    pub date: String,
    /// Link to the full post.
    pub link: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Ways to reach the owner.
pub struct Contact {
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// City and region.
    pub location: String,
    /// Social profile URLs.
    #[serde(default)]
    pub links: Vec<String>,
}

impl Content {
    /// Loads content from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match the content shape.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path)?;
        let content = serde_json::from_str(&raw)?;
        tracing::info!(path = %path.display(), "loaded portfolio content");
        Ok(content)
    }
}

impl Default for Content {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Jane Doe".to_string(),
                tagline: "Building the Future with Code".to_string(),
                about: vec![
                    "Hello! I'm Jane, a passionate software developer with a knack for creating \
                     elegant solutions to complex problems. With a background in Computer Science \
                     and 5+ years of industry experience, I've worked on a diverse range of \
                     projects that have honed my skills and fueled my curiosity."
                        .to_string(),
                    "My journey in tech began with a fascination for how software can impact \
                     lives. That led me to a degree in Computer Science from Tech University, \
                     where I graduated with honors."
                        .to_string(),
                    "When I'm not coding, you can find me exploring hiking trails, experimenting \
                     with new recipes, or contributing to open-source projects."
                        .to_string(),
                ],
                facts: vec![
                    "BS in Computer Science from Tech University".to_string(),
                    "5+ years of professional software development experience".to_string(),
                    "Awarded \"Innovator of the Year\" at TechCorp (2022)".to_string(),
                    "Passionate about sustainable technology and AI ethics".to_string(),
                    "Hobby: digital illustration and UI/UX design".to_string(),
                ],
            },
            skills: [
                ("JavaScript", 90),
                ("React", 85),
                ("Node.js", 80),
                ("Python", 75),
                ("SQL", 70),
                ("AWS", 65),
            ]
            .into_iter()
            .map(|(name, level)| Skill {
                name: name.to_string(),
                level,
            })
            .collect(),
            projects: vec![
                project(
                    "E-commerce Platform",
                    "A full-stack e-commerce solution with React and Node.js",
                    "ecommerce-platform",
                ),
                project(
                    "AI Chatbot",
                    "An AI-powered chatbot using natural language processing",
                    "ai-chatbot",
                ),
                project(
                    "Task Management App",
                    "A React Native mobile app for task management",
                    "task-management-app",
                ),
                project(
                    "Data Visualization Dashboard",
                    "An interactive dashboard using D3.js and React",
                    "data-viz-dashboard",
                ),
            ],
            posts: vec![
                post(
                    "The Future of Web Development",
                    "Exploring emerging trends and technologies shaping the web...",
                    "2023-05-15",
                    "future-of-web-development",
                ),
                post(
                    "Optimizing React Performance",
                    "Tips and tricks to boost your React application's performance...",
                    "2023-04-22",
                    "optimizing-react-performance",
                ),
                post(
                    "Introduction to GraphQL",
                    "A beginner's guide to understanding and implementing GraphQL...",
                    "2023-03-10",
                    "introduction-to-graphql",
                ),
            ],
            contact: Contact {
                email: "jane.doe@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                links: vec![
                    "https://github.com/janedoe".to_string(),
                    "https://linkedin.com/in/janedoe".to_string(),
                    "https://twitter.com/janedoe".to_string(),
                ],
            },
        }
    }
}

fn project(title: &str, description: &str, slug: &str) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        image_ref: format!("/images/{slug}.svg"),
        repository_link: format!("https://github.com/janedoe/{slug}"),
        demo_link: format!("https://{slug}-demo.com"),
    }
}

fn post(title: &str, excerpt: &str, date: &str, slug: &str) -> Post {
    Post {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        date: date.to_string(),
        link: format!("/blog/{slug}"),
    }
}

#[cfg(test)]
#[path = "tests/content.rs"]
mod tests;
