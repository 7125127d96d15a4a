//! Typed model of the content document.
//!
//! The document is a one-shot, read-only snapshot: fetched (or substituted)
//! once per page view, consumed by a single render pass, and discarded on
//! navigation. Field names follow the camelCase wire format of
//! `content.json`; renderers assume required fields exist, so everything
//! that may legitimately be absent is an `Option` or a defaulted list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub global: GlobalContent,
    pub landing_page: LandingPage,
    pub iframe_page: IframePage,
    pub projects_team_page: ProjectsTeamPage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalContent {
    pub institute_name: String,
    pub project_type: String,
    pub logo_image: String,
    #[serde(default)]
    pub social_media: Vec<SocialLink>,
    #[serde(default)]
    pub footer_links: Vec<FooterLink>,
    pub copyright_year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub icon: String,
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub title: String,
    pub hero: Hero,
    pub acknowledgement: Acknowledgement,
    #[serde(default)]
    pub features: Vec<Feature>,
    pub about_us: AboutUs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub heading1: String,
    pub heading2: String,
    /// May carry inline `**strong**` markup.
    pub paragraph: String,
    pub cta_button_text: String,
    pub cta_button_link: String,
    pub background_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgement {
    pub heading: String,
    pub paragraph: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUs {
    pub heading: String,
    pub paragraph: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IframePage {
    pub title: String,
    pub main_heading: String,
    /// May carry inline `**strong**` markup.
    pub description: String,
    #[serde(default)]
    pub iframes: Vec<IframeEmbed>,
    pub footer_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IframeEmbed {
    pub id: String,
    pub title: String,
    pub src: String,
    pub field_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsTeamPage {
    pub title: String,
    pub projects_section_heading: String,
    #[serde(default)]
    pub projects_details: Option<ProjectDetails>,
    pub team_section_heading: String,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub image: String,
    pub name: String,
    pub role: String,
    pub bio: String,
}

/// The compiled-in substitute used when network retrieval fails.
///
/// Kept structurally in sync with `pages/content.json` by convention; the
/// tests in `loader` push it through the same parse boundary the fetch path
/// uses, so the wire shape cannot drift from these types.
pub fn fallback_document() -> ContentDocument {
    ContentDocument {
        global: GlobalContent {
            institute_name: "GATES INSTITUTE OF TECHNOLOGY".to_string(),
            project_type: "Community Service Project (CSP)".to_string(),
            logo_image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTRCmGgdfTQvxIziaigTaStHsoz3nB4RZCOUoiERkRKU0SNxTbWriewBNchC7efQyLnzBc&usqp=CAU".to_string(),
            social_media: Vec::new(),
            footer_links: vec![
                FooterLink { text: "Privacy Policy".to_string(), url: "#".to_string() },
                FooterLink { text: "Terms of Service".to_string(), url: "#".to_string() },
                FooterLink { text: "Sitemap".to_string(), url: "#".to_string() },
            ],
            copyright_year: "2025".to_string(),
        },
        landing_page: LandingPage {
            title: "GATES Institute of Technology - Community Service Project".to_string(),
            hero: Hero {
                heading1: "Community Service Project".to_string(),
                heading2: "IoT Solutions for a Better Tomorrow".to_string(),
                paragraph: "Welcome to our academic endeavor from **GATES INSTITUTE OF TECHNOLOGY**. We're leveraging **IoT technology** to address real-world community challenges and create impactful solutions.".to_string(),
                cta_button_text: "Explore Our Innovations".to_string(),
                cta_button_link: "projects_team.html".to_string(),
                background_image: "https://source.unsplash.com/1600x900/?technology,community,iot".to_string(),
            },
            acknowledgement: Acknowledgement {
                heading: "A Project by Students of GATES Institute of Technology".to_string(),
                paragraph: "This Community Service Project (CSP) is a testament to our commitment to practical learning and societal contribution. We aim to apply theoretical knowledge to solve tangible problems within our community.".to_string(),
            },
            features: vec![
                Feature {
                    icon: "https://via.placeholder.com/80x80/28a745/FFFFFF?text=IoT".to_string(),
                    title: "IoT-Driven Solutions".to_string(),
                    description: "Developing smart, connected systems to monitor, collect data, and automate community services.".to_string(),
                },
                Feature {
                    icon: "https://via.placeholder.com/80x80/007bff/FFFFFF?text=Comm".to_string(),
                    title: "Direct Community Impact".to_string(),
                    description: "Our projects are designed to directly benefit local communities, addressing specific needs.".to_string(),
                },
                Feature {
                    icon: "https://via.placeholder.com/80x80/6c757d/FFFFFF?text=Acad".to_string(),
                    title: "Academic Excellence".to_string(),
                    description: "Integrating advanced technical skills with practical application for robust solutions.".to_string(),
                },
            ],
            about_us: AboutUs {
                heading: "Our Mission & Vision".to_string(),
                paragraph: "Our mission is to apply our knowledge in Information Technology and Electronics to develop sustainable and scalable solutions for community well-being. We envision a future where technology empowers every aspect of public service.".to_string(),
                button_text: "Meet The Team".to_string(),
                button_link: "projects_team.html".to_string(),
            },
        },
        iframe_page: IframePage {
            title: "Live IoT Data - ThingSpeak".to_string(),
            main_heading: "Live IoT Data from ThingSpeak".to_string(),
            description: "This section showcases real-time data from our **IoT projects**, streamed directly through **ThingSpeak**. This demonstrates the operational status and effectiveness of our implemented solutions.".to_string(),
            iframes: vec![IframeEmbed {
                id: "thingSpeakChart1".to_string(),
                title: "IoT Reading: Environmental Sensor".to_string(),
                src: "https://thingspeak.com/channels/YOUR_CHANNEL_ID_1/charts/1?bgcolor=%23ffffff&color=%23d62020&dynamic=true&results=60&title=Environmental+Sensor&type=line&width=auto".to_string(),
                field_description: "This chart displays real-time temperature and humidity data collected from our environmental monitoring unit, providing insights into local conditions.".to_string(),
            }],
            footer_description: "The data shown reflects the current state of our IoT deployments. This real-time feedback is crucial for monitoring and validating our project's impact.".to_string(),
        },
        projects_team_page: ProjectsTeamPage {
            title: "Our CSP Projects & Team - GATES".to_string(),
            projects_section_heading: "Our IoT-Based CSP Initiatives".to_string(),
            projects_details: Some(ProjectDetails {
                title: "Integrated Smart Community Solutions".to_string(),
                description: "Our Community Service Project focuses on developing innovative IoT-based solutions to enhance various aspects of community living. We address challenges in waste management, environmental monitoring, and energy efficiency. Our approach involves deploying low-cost sensors, real-time data analysis through platforms like ThingSpeak, and creating user-friendly interfaces for community engagement. This project is a practical application of our academic knowledge to create tangible benefits for society.".to_string(),
            }),
            team_section_heading: "Our Dedicated 5-Member Team".to_string(),
            team_members: vec![
                TeamMember {
                    image: "https://randomuser.me/api/portraits/men/1.jpg".to_string(),
                    name: "[Student Name 1]".to_string(),
                    role: "Team Lead / IoT Architect".to_string(),
                    bio: "Responsible for overall project coordination and core IoT system architecture. Passionate about smart solutions and efficient data flow.".to_string(),
                },
                TeamMember {
                    image: "https://randomuser.me/api/portraits/women/2.jpg".to_string(),
                    name: "[Student Name 2]".to_string(),
                    role: "Hardware & Sensor Integration".to_string(),
                    bio: "Expert in sensor calibration, microcontroller programming, and building robust hardware prototypes for reliable data acquisition.".to_string(),
                },
                TeamMember {
                    image: "https://randomuser.me/api/portraits/men/3.jpg".to_string(),
                    name: "[Student Name 3]".to_string(),
                    role: "Software & Data Management".to_string(),
                    bio: "Handles data parsing, cloud integration (ThingSpeak), and developing the application logic for our IoT deployments and data processing.".to_string(),
                },
                TeamMember {
                    image: "https://randomuser.me/api/portraits/women/4.jpg".to_string(),
                    name: "[Student Name 4]".to_string(),
                    role: "Web Development & UI/UX".to_string(),
                    bio: "Focuses on creating user-friendly web interfaces and ensuring our project's data is presented clearly and effectively, enhancing user experience.".to_string(),
                },
                TeamMember {
                    image: "https://randomuser.me/api/portraits/men/5.jpg".to_string(),
                    name: "[Student Name 5]".to_string(),
                    role: "Research & Community Liaison".to_string(),
                    bio: "Conducts research on community needs and ensures our projects are relevant and impactful, bridging technological solutions with real-world problems and engagement.".to_string(),
                },
            ],
        },
    }
}
