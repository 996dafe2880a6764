use std::collections::HashSet;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::dto::GenerateCvRequest;
use super::models::{Education, Experience, GeneratedCv, Language, PersonalInfo, Skill, SkillLevel};
use crate::api::jobs::ExperienceLevel;

const PLACEHOLDER_LOCATION: &str = "Ville, Pays";

const COMMON_SKILLS: &[(&str, SkillLevel)] = &[
    ("Communication", SkillLevel::Advanced),
    ("Travail d'équipe", SkillLevel::Advanced),
    ("Résolution de problèmes", SkillLevel::Advanced),
];

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Field of work inferred from the job title and industry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillDomain {
    Development,
    Marketing,
    Management,
    Design,
}

impl SkillDomain {
    /// First matching domain in declaration order. Title keywords match as
    /// lower-case substrings, the industry must equal the domain name.
    pub fn detect(job_title: &str, industry: Option<&str>) -> Option<Self> {
        let title = job_title.to_lowercase();
        let industry = industry.map(str::to_lowercase).unwrap_or_default();
        let title_has = |keywords: &[&str]| keywords.iter().any(|k| title.contains(k));

        if title_has(&["dev", "fullstack"]) || industry == "tech" {
            Some(SkillDomain::Development)
        } else if title_has(&["marketing"]) || industry == "marketing" {
            Some(SkillDomain::Marketing)
        } else if title_has(&["manager", "chef"]) || industry == "management" {
            Some(SkillDomain::Management)
        } else if title_has(&["design"]) || industry == "design" {
            Some(SkillDomain::Design)
        } else {
            None
        }
    }

    fn skills(self) -> &'static [(&'static str, SkillLevel)] {
        use SkillLevel::*;

        match self {
            SkillDomain::Development => &[
                ("React", Expert),
                ("TypeScript", Advanced),
                ("Node.js", Advanced),
                ("Tailwind CSS", Expert),
                ("Git", Advanced),
            ],
            SkillDomain::Marketing => &[
                ("SEO", Expert),
                ("Google Analytics", Advanced),
                ("Content Marketing", Expert),
                ("Social Media", Advanced),
            ],
            SkillDomain::Management => &[
                ("Gestion de projet", Expert),
                ("Leadership", Advanced),
                ("Planification stratégique", Advanced),
            ],
            SkillDomain::Design => &[
                ("Figma", Expert),
                ("Adobe Creative Suite", Advanced),
                ("UI/UX Design", Expert),
            ],
        }
    }
}

/// Build a draft CV from a brief.
///
/// Everything except ids and the timestamp is derived deterministically
/// from the request.
pub fn generate_cv(request: &GenerateCvRequest) -> GeneratedCv {
    let job_title = request.job_title();
    let industry = request.industry();
    debug!(
        "Generating CV for {:?} ({}, industry {:?})",
        job_title,
        request.experience_level.as_str(),
        industry
    );

    let summary = match request.description() {
        Some(description) => description.to_string(),
        None => default_summary(job_title, industry),
    };

    GeneratedCv {
        id: new_id(),
        title: format!("CV {}", job_title),
        last_modified: Utc::now(),
        personal_info: PersonalInfo {
            full_name: "Prénom Nom".to_string(),
            title: job_title.to_string(),
            summary,
            ..Default::default()
        },
        experience: generate_experience(job_title, request.experience_level, industry),
        education: vec![placeholder_education(industry)],
        skills: generate_skills(job_title, request.key_skills.as_deref(), industry),
        languages: vec![
            language("Français", "Langue maternelle"),
            language("Anglais", "Intermédiaire"),
        ],
        interests: vec!["Centre d'intérêt 1".to_string(), "Centre d'intérêt 2".to_string()],
    }
}

fn default_summary(job_title: &str, industry: Option<&str>) -> String {
    let sector = industry
        .map(|industry| format!(" dans le secteur {}", industry))
        .unwrap_or_default();
    format!(
        "Professionnel passionné avec une expérience solide en {}{}. \
         Motivé par l'innovation et la résolution de problèmes complexes.",
        job_title, sector
    )
}

fn language(name: &str, level: &str) -> Language {
    Language {
        id: new_id(),
        name: name.to_string(),
        level: level.to_string(),
    }
}

fn placeholder_education(industry: Option<&str>) -> Education {
    let field = match industry {
        Some("Tech") => "Informatique",
        Some("Finance") => "Finance",
        _ => "Domaine d'étude",
    };

    Education {
        id: new_id(),
        school: "Votre École / Université".to_string(),
        degree: "Diplôme obtenu".to_string(),
        field: field.to_string(),
        start_date: "2018-09".to_string(),
        end_date: Some("2020-06".to_string()),
        current: false,
        location: PLACEHOLDER_LOCATION.to_string(),
    }
}

/// Custom skills first (as Expert), then the domain set, then the common
/// set. A name already present is skipped, keeping its first level.
pub fn generate_skills(job_title: &str, key_skills: Option<&str>, industry: Option<&str>) -> Vec<Skill> {
    let custom = key_skills
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| (name, SkillLevel::Expert));
    let domain = SkillDomain::detect(job_title, industry)
        .map(SkillDomain::skills)
        .unwrap_or_default()
        .iter()
        .copied();

    let mut seen = HashSet::new();
    custom
        .chain(domain)
        .chain(COMMON_SKILLS.iter().copied())
        .filter(|(name, _)| seen.insert(*name))
        .map(|(name, level)| Skill {
            id: new_id(),
            name: name.to_string(),
            level,
        })
        .collect()
}

struct Role {
    tech_company: &'static str,
    other_company: &'static str,
    position_prefix: Option<&'static str>,
    start_date: &'static str,
    end_date: Option<&'static str>,
    description: &'static str,
}

const JUNIOR_ROLES: &[Role] = &[Role {
    tech_company: "StartUp Tech",
    other_company: "Entreprise Innovante",
    position_prefix: Some("Stagiaire"),
    start_date: "2022-01",
    end_date: Some("2022-06"),
    description: "Assistance sur les projets, participation aux réunions d'équipe et apprentissage des processus internes.",
}];

const MID_ROLES: &[Role] = &[
    Role {
        tech_company: "Entreprise SaaS",
        other_company: "Groupe International",
        position_prefix: None,
        start_date: "2021-03",
        end_date: None,
        description: "Gestion autonome de projets, encadrement de juniors et amélioration des processus existants.",
    },
    Role {
        tech_company: "Agence Web",
        other_company: "PME Locale",
        position_prefix: Some("Junior"),
        start_date: "2019-09",
        end_date: Some("2021-02"),
        description: "Participation au développement de solutions et collaboration avec l'équipe.",
    },
];

const SENIOR_ROLES: &[Role] = &[
    Role {
        tech_company: "Grande Entreprise Tech",
        other_company: "Multinationale",
        position_prefix: Some("Senior"),
        start_date: "2020-01",
        end_date: None,
        description: "Direction technique des projets majeurs, définition de l'architecture et mentorat de l'équipe.",
    },
    Role {
        tech_company: "Scale-up",
        other_company: "Grand Groupe",
        position_prefix: None,
        start_date: "2017-06",
        end_date: Some("2019-12"),
        description: "Responsable de module critique, optimisation des performances et mise en place de standards.",
    },
];

/// Most recent position first. Company names switch to tech employers when
/// the industry is exactly `Tech` or the title mentions `dev`.
pub fn generate_experience(job_title: &str, level: ExperienceLevel, industry: Option<&str>) -> Vec<Experience> {
    let is_tech = industry == Some("Tech") || job_title.to_lowercase().contains("dev");
    let roles = match level {
        ExperienceLevel::Junior => JUNIOR_ROLES,
        ExperienceLevel::Mid => MID_ROLES,
        ExperienceLevel::Senior => SENIOR_ROLES,
    };

    roles
        .iter()
        .map(|role| Experience {
            id: new_id(),
            company: (if is_tech { role.tech_company } else { role.other_company }).to_string(),
            position: match role.position_prefix {
                Some(prefix) => format!("{} {}", prefix, job_title),
                None => job_title.to_string(),
            },
            start_date: role.start_date.to_string(),
            end_date: role.end_date.map(str::to_string),
            current: role.end_date.is_none(),
            location: PLACEHOLDER_LOCATION.to_string(),
            description: role.description.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(skills: &[Skill]) -> Vec<&str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    fn request(job_title: &str, level: ExperienceLevel) -> GenerateCvRequest {
        GenerateCvRequest {
            job_title: Some(job_title.to_string()),
            experience_level: level,
            key_skills: None,
            industry: None,
            description: None,
        }
    }

    const COMMON: [&str; 3] = ["Communication", "Travail d'équipe", "Résolution de problèmes"];

    #[test]
    fn development_keywords() {
        for title in ["Rust Developer", "Senior Dev", "Fullstack Engineer"] {
            assert_eq!(SkillDomain::detect(title, None), Some(SkillDomain::Development), "{}", title);
        }
        assert_eq!(SkillDomain::detect("Consultant", Some("TECH")), Some(SkillDomain::Development));

        let skills = generate_skills("Fullstack Engineer", None, None);
        assert_eq!(
            names(&skills),
            [&["React", "TypeScript", "Node.js", "Tailwind CSS", "Git"][..], &COMMON[..]].concat()
        );
        assert_eq!(skills[0].level, SkillLevel::Expert);
        assert_eq!(skills[1].level, SkillLevel::Advanced);
    }

    #[test]
    fn marketing_keywords() {
        assert_eq!(SkillDomain::detect("Product Marketing Lead", None), Some(SkillDomain::Marketing));
        assert_eq!(SkillDomain::detect("Consultant", Some("Marketing")), Some(SkillDomain::Marketing));
        assert_eq!(
            names(&generate_skills("Responsable Marketing", None, None))[..4],
            ["SEO", "Google Analytics", "Content Marketing", "Social Media"]
        );
    }

    #[test]
    fn management_keywords() {
        assert_eq!(SkillDomain::detect("Office Manager", None), Some(SkillDomain::Management));
        assert_eq!(SkillDomain::detect("Chef de projet", None), Some(SkillDomain::Management));
        assert_eq!(SkillDomain::detect("Consultant", Some("management")), Some(SkillDomain::Management));
        assert_eq!(
            names(&generate_skills("Chef de projet", None, None))[..3],
            ["Gestion de projet", "Leadership", "Planification stratégique"]
        );
    }

    #[test]
    fn design_keywords() {
        assert_eq!(SkillDomain::detect("UI Designer", None), Some(SkillDomain::Design));
        assert_eq!(SkillDomain::detect("Consultant", Some("Design")), Some(SkillDomain::Design));
        assert_eq!(
            names(&generate_skills("UI Designer", None, None))[..3],
            ["Figma", "Adobe Creative Suite", "UI/UX Design"]
        );
    }

    #[test]
    fn earlier_domains_take_precedence() {
        // "dev" wins over "marketing", "manager" wins over "design"
        assert_eq!(SkillDomain::detect("Marketing Developer", None), Some(SkillDomain::Development));
        assert_eq!(SkillDomain::detect("Design Manager", None), Some(SkillDomain::Management));
    }

    #[test]
    fn unknown_title_gets_common_skills_only() {
        assert_eq!(SkillDomain::detect("Comptable", Some("Finance")), None);
        assert_eq!(names(&generate_skills("Comptable", None, Some("Finance"))), COMMON);
    }

    #[test]
    fn custom_skills_are_split_trimmed_and_listed_first() {
        let skills = generate_skills("Comptable", Some(" SAP , ,Excel,"), None);
        assert_eq!(names(&skills), [&["SAP", "Excel"][..], &COMMON[..]].concat());
        assert!(skills[..2].iter().all(|s| s.level == SkillLevel::Expert));
    }

    #[test]
    fn duplicate_names_keep_first_occurrence() {
        let skills = generate_skills("Web Developer", Some("Git, Communication, Git"), None);
        let names = names(&skills);

        assert_eq!(names.iter().filter(|n| **n == "Git").count(), 1);
        assert_eq!(names.iter().filter(|n| **n == "Communication").count(), 1);
        assert_eq!(&names[..2], ["Git", "Communication"]);
        // custom entries carry their Expert level over the domain/common ones
        assert!(skills[..2].iter().all(|s| s.level == SkillLevel::Expert));
        assert_eq!(skills.len(), 2 + 4 + 2);
    }

    #[test]
    fn junior_gets_one_internship() {
        let experience = generate_experience("Analyste", ExperienceLevel::Junior, None);
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].company, "Entreprise Innovante");
        assert_eq!(experience[0].position, "Stagiaire Analyste");
        assert_eq!(experience[0].end_date.as_deref(), Some("2022-06"));
        assert!(!experience[0].current);
    }

    #[test]
    fn mid_gets_current_role_and_junior_role() {
        let experience = generate_experience("Backend Developer", ExperienceLevel::Mid, None);
        let companies: Vec<_> = experience.iter().map(|e| e.company.as_str()).collect();
        let positions: Vec<_> = experience.iter().map(|e| e.position.as_str()).collect();

        assert_eq!(companies, ["Entreprise SaaS", "Agence Web"]);
        assert_eq!(positions, ["Backend Developer", "Junior Backend Developer"]);
        assert!(experience[0].current);
        assert_eq!(experience[0].end_date, None);
        assert_eq!(experience[1].start_date, "2019-09");
    }

    #[test]
    fn senior_gets_two_roles() {
        let experience = generate_experience("Juriste", ExperienceLevel::Senior, None);
        let companies: Vec<_> = experience.iter().map(|e| e.company.as_str()).collect();

        assert_eq!(companies, ["Multinationale", "Grand Groupe"]);
        assert_eq!(experience[0].position, "Senior Juriste");
        assert_eq!(experience[1].position, "Juriste");

        let tech = generate_experience("Juriste", ExperienceLevel::Senior, Some("Tech"));
        assert_eq!(tech[0].company, "Grande Entreprise Tech");
        assert_eq!(tech[1].company, "Scale-up");
    }

    #[test]
    fn tech_employers_need_exact_industry_name() {
        let experience = generate_experience("Juriste", ExperienceLevel::Junior, Some("tech"));
        assert_eq!(experience[0].company, "Entreprise Innovante");
    }

    #[test]
    fn summary_defaults_from_title_and_industry() {
        let mut brief = request("Data Analyst", ExperienceLevel::Mid);
        brief.industry = Some("Finance".to_string());
        let cv = generate_cv(&brief);

        assert_eq!(cv.title, "CV Data Analyst");
        assert_eq!(cv.personal_info.title, "Data Analyst");
        assert_eq!(cv.personal_info.full_name, "Prénom Nom");
        assert_eq!(
            cv.personal_info.summary,
            "Professionnel passionné avec une expérience solide en Data Analyst dans le secteur Finance. \
             Motivé par l'innovation et la résolution de problèmes complexes."
        );
        assert_eq!(cv.education[0].field, "Finance");
        assert_eq!(cv.languages.len(), 2);
        assert_eq!(cv.interests.len(), 2);
    }

    #[test]
    fn description_replaces_summary() {
        let mut brief = request("Designer", ExperienceLevel::Junior);
        brief.description = Some("Designer produit orienté utilisateurs.".to_string());
        let cv = generate_cv(&brief);

        assert_eq!(cv.personal_info.summary, "Designer produit orienté utilisateurs.");
        assert_eq!(cv.education[0].field, "Domaine d'étude");
        assert!(!cv.personal_info.summary.contains("secteur"));
    }

    #[test]
    fn ids_are_unique() {
        let cv = generate_cv(&request("Web Developer", ExperienceLevel::Senior));
        let mut ids: Vec<&str> = cv.skills.iter().map(|s| s.id.as_str()).collect();
        ids.extend(cv.experience.iter().map(|e| e.id.as_str()));
        ids.push(cv.id.as_str());

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
