//! Static page content: profile, skills, projects, certifications.
//!
//! Everything here is `'static` data consumed by the render tree. External
//! URLs are opaque; the page only links to them.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub bio: &'static [&'static str],
    pub photo_path: &'static str,
    pub resume_path: &'static str,
    pub email: &'static str,
    pub linkedin_url: &'static str,
    pub github_url: &'static str,
    pub credit: &'static str,
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub repo_url: &'static str,
    pub demo_url: Option<&'static str>,
    pub tech: &'static [&'static str],
}

/// Icon shown next to a certification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CertKind {
    Badge,
    Document,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub kind: CertKind,
    pub credential_url: &'static str,
}

/// In-page navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Subhajyoti Maity",
    initials: "SM",
    bio: &[
        "A developer based in Kolkata, West Bengal. I am currently pursuing a Bachelor of Technology in \
         Artificial Intelligence and Machine Learning from Netaji Subhash Engineering College, Garia, \
         expecting to graduate in 2026.",
        "As a proactive learner, I have gained hands-on experience through academic projects in Machine \
         Learning and Full-Stack Development. I enjoy developing practical solutions involving data \
         processing, model implementation, and scalable web applications. I am eager to apply my technical \
         skills, learn from industry professionals, and contribute to real-world AI-driven projects!",
    ],
    photo_path: "/my%20photoo.jpg",
    resume_path: "/SUBHAJYOTI_RESUME.pdf",
    email: "msubhajyoti62@gmail.com",
    linkedin_url: "https://www.linkedin.com/in/subhajyoti-maity-207815251",
    github_url: "https://github.com/Subhajyoti-Maity",
    credit: "Designed inspired by Brittany Chiang. Built by Subhajyoti Maity.",
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Work", href: "#projects" },
    NavLink { label: "Certifications", href: "#certifications" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        icon: "\u{1f4bb}",
        title: "Languages & Web",
        items: "Python, Java, JavaScript, React, HTML5, CSS3, Tailwind CSS",
    },
    SkillGroup {
        icon: "\u{2699}\u{fe0f}",
        title: "Backend",
        items: "TypeScript, Node.js, Express.js, Flask, Streamlit",
    },
    SkillGroup {
        icon: "\u{1f916}",
        title: "AI & ML",
        items: "TensorFlow, PyTorch, Scikit-learn, Pandas, Numpy",
    },
    SkillGroup {
        icon: "\u{1f6e0}\u{fe0f}",
        title: "Tools & DB",
        items: "Git, GitHub, SQL, MongoDB Atlas",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "CineRank",
        summary: "Modern movies & people discovery platform featuring real TMDB data, advanced filters, \
                  Clerk authentication, and a responsive UI.",
        repo_url: "https://github.com/Subhajyoti-Maity/CineRank.git",
        demo_url: Some("https://cine-rank-f8zs.vercel.app/"),
        tech: &["React", "Tailwind", "TMDB API", "Clerk"],
    },
    Project {
        name: "Audio Emotion AI",
        summary: "Real-time audio emotion detection extracting MFCCs via Keras/TensorFlow to detect 8 \
                  emotions, served on a Flask backend.",
        repo_url: "https://github.com/Subhajyoti-Maity/Emotion-Detection-Using-Audio.git",
        demo_url: None,
        tech: &["Python", "Flask", "TensorFlow", "Librosa"],
    },
    Project {
        name: "Formula Detector",
        summary: "Automated formula extraction from documents using YOLOv8 detection and Transformer-based \
                  LaTeX recognition with PDF/image inputs.",
        repo_url: "https://github.com/Subhajyoti-Maity/Mathematical-Formula-Detector.git",
        demo_url: None,
        tech: &["PyTorch", "Streamlit", "OpenCV", "OCR"],
    },
    Project {
        name: "Attrition Forecaster",
        summary: "ML-powered HR attrition risk dashboard featuring real-time risk prediction, an interactive \
                  XGBoost model, and detailed employee overviews.",
        repo_url: "https://github.com/Subhajyoti-Maity/Employee-Attrition-Prediction.git",
        demo_url: None,
        tech: &["Python", "Scikit-learn", "XGBoost", "Pandas"],
    },
    Project {
        name: "Diabetes Healthcare",
        summary: "Integrated prediction app providing ML diagnosis, a medical chatbot, medication \
                  recommendations, and generated PDF reports.",
        repo_url: "https://github.com/Subhajyoti-Maity/Diabetes-Healthcare-Program.git",
        demo_url: None,
        tech: &["Streamlit", "scikit-learn", "Pandas", "FPDF"],
    },
    Project {
        name: "Socket.io Web Chat",
        summary: "Full-stack real-time messaging app featuring secure authentication (JWT), Socket.io \
                  communication, and MongoDB storage across devices.",
        repo_url: "https://github.com/Subhajyoti-Maity/Real-Time-Chat-Application.git",
        demo_url: None,
        tech: &["Next.js", "TypeScript", "Socket.io", "MongoDB"],
    },
    Project {
        name: "Electricity Bill Portal",
        summary: "MERN stack bill management system with secure user auth, detailed dashboard, CRUD \
                  operations, RESTful API, and bill estimator.",
        repo_url: "https://github.com/Subhajyoti-Maity/Electricity-Bill-Management-Portal.git",
        demo_url: None,
        tech: &["React", "Express", "MongoDB", "JWT"],
    },
    Project {
        name: "Movie Recommender System",
        summary: "Content-based movie recommendation app with advanced search, trailer links, streaming \
                  service detection, and personal collections.",
        repo_url: "https://github.com/Subhajyoti-Maity/Movie-Recommender-System.git",
        demo_url: None,
        tech: &["Python", "Streamlit", "scikit-learn", "Pandas"],
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Oracle Cloud Infrastructure 2025 Certified Generative AI Professional",
        kind: CertKind::Badge,
        credential_url: "https://catalog-education.oracle.com/pls/certview/sharebadge?id=\
                         EE17204B79432DDB008996C6B376604531F03019E78BDABB0A9FAE1F5E83BCCF",
    },
    Certification {
        title: "Hackerrank SQL (Basic) Certificate",
        kind: CertKind::Document,
        credential_url: "https://www.hackerrank.com/certificates/3f4dcd660ae8",
    },
    Certification {
        title: "Hackerrank Python (Basic) Certificate",
        kind: CertKind::Document,
        credential_url: "https://www.hackerrank.com/certificates/e69966d2412a",
    },
];

pub const CONTACT_PITCH: &str = "I'm actively seeking full-time opportunities where I can apply my skills in \
     software engineering, AI/ML, and full-stack development. My inbox is always open. Whether you have a \
     question or just want to say hi, I'll try my best to get back to you!";
