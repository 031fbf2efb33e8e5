//! Site content.
//!
//! Every record is a `&'static` literal; the landing crate renders them and
//! `folio content --json` dumps them.

use serde::Serialize;

/// Icons used by cards. The landing page draws them as emoji.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Brain,
    Radio,
    Gamepad,
    Book,
    Calculator,
    Code,
    Cpu,
    Beer,
    Activity,
    GraduationCap,
    Award,
    Mail,
    Github,
    Linkedin,
    MapPin,
    Download,
    Message,
}

impl Icon {
    /// Emoji stand-in.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Brain => "🧠",
            Self::Radio => "📡",
            Self::Gamepad => "🎮",
            Self::Book => "📖",
            Self::Calculator => "🧮",
            Self::Code => "⌨",
            Self::Cpu => "🔌",
            Self::Beer => "🍺",
            Self::Activity => "📈",
            Self::GraduationCap => "🎓",
            Self::Award => "🏅",
            Self::Mail => "✉",
            Self::Github => "🐙",
            Self::Linkedin => "💼",
            Self::MapPin => "📍",
            Self::Download => "⬇",
            Self::Message => "💬",
        }
    }
}

/// Who the site is about.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub specializations: &'static [&'static str],
    pub description: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    /// Short availability line on the contact grid
    pub availability: (&'static str, &'static str),
}

pub const PROFILE: Profile = Profile {
    name: "Axel Sundqvist",
    initials: "AS",
    title: "Applied Physics & Electrical Engineering Student",
    specializations: &[
        "Communications",
        "Mathematics",
        "Signal Processing",
        "Machine Learning",
    ],
    description: "Passionate about the intersection of mathematics and technology, exploring how signal processing \
                  and machine learning can solve real-world problems in communications and beyond.",
    location: "Linköping, Sweden",
    email: "axesu672@student.liu.se",
    github: "https://github.com/AxelSuu",
    linkedin: "https://www.linkedin.com/in/axel-sundqvist/",
    availability: ("Open to opportunities", "Summer 2026 Internships"),
};

impl Profile {
    /// `mailto:` link with a prefilled subject and greeting.
    pub fn mailto(&self) -> String {
        let first = self.name.split_whitespace().next().unwrap_or(self.name);
        format!(
            "mailto:{}?subject=Portfolio%20Contact&body=Hi%20{},%0D%0A%0D%0AI'm%20interested%20in%20discussing...",
            self.email, first
        )
    }
}

/// Project card.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub icon: Icon,
    /// CSS accent class
    pub accent: &'static str,
    pub github: &'static str,
    pub demo: Option<&'static str>,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Stock Price Predictor Suite",
        description: "Developed a real-time PyTorch-based stock price forecasting neural network.",
        technologies: &["Python", "PyTorch", "Numpy", "Pandas"],
        icon: Icon::Brain,
        accent: "accent-blue",
        github: "https://github.com/AxelSuu/Pytorch-Quant-Model",
        demo: None,
        featured: true,
    },
    Project {
        title: "Communication Systems Simulations",
        description: "Simulations of modulation and communication systems",
        technologies: &["Python", "NumPy", "Scikit-learn", "Wireless Communications"],
        icon: Icon::Radio,
        accent: "accent-purple",
        github: "https://github.com/AxelSuu/communications",
        demo: None,
        featured: true,
    },
    Project {
        title: "2D Platformer Game",
        description: "A 2D platformer game built with Python and Pygame.",
        technologies: &["Python", "Pygame", "Game Development"],
        icon: Icon::Gamepad,
        accent: "accent-green",
        github: "https://github.com/AxelSuu/Skybound-2.0",
        demo: None,
        featured: false,
    },
    Project {
        title: "Notepad App",
        description: "Interactive text editor with integrated file management",
        technologies: &["Python", "Pygame", "GUI Development"],
        icon: Icon::Book,
        accent: "accent-orange",
        github: "https://github.com/AxelSuu/Notepad-app",
        demo: None,
        featured: false,
    },
];

/// Featured projects in declaration order.
pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// Remaining projects in declaration order.
pub fn other_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| !p.featured)
}

/// Tech-stack row.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    pub accent: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "PyTorch", icon: Icon::Brain, accent: "accent-blue" },
    Skill { name: "NumPy", icon: Icon::Book, accent: "accent-purple" },
    Skill { name: "Scikit-Learn", icon: Icon::Calculator, accent: "accent-green" },
    Skill { name: "C++", icon: Icon::Code, accent: "accent-orange" },
    Skill { name: "Embedded", icon: Icon::Cpu, accent: "accent-yellow" },
];

/// Counter tile.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 4, suffix: "", label: "Years on Github", accent: "accent-blue" },
    Stat { value: 11, suffix: "", label: "Projects", accent: "accent-purple" },
    Stat { value: 50, suffix: "%", label: "Coffee", accent: "accent-orange" },
];

/// Small achievement tile.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Beer Pong Top 8",
        description: "LIUs BP Tournament",
        icon: Icon::Beer,
        accent: "accent-amber",
    },
    Achievement {
        title: "VilleValla Bartender",
        description: "Student pub",
        icon: Icon::Activity,
        accent: "accent-purple",
    },
    Achievement {
        title: "ESP32 pong",
        description: "Peripherals + wifi",
        icon: Icon::Gamepad,
        accent: "accent-green",
    },
];

/// Degree entry.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub years: &'static str,
    pub note: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "MSE Applied Physics & EE",
        school: "Linköping University",
        years: "2026-28",
        note: "Starting masters next year",
    },
    Education {
        degree: "B.Sc. Applied Physics & EE",
        school: "Linköping University",
        years: "2023-26",
        note: "Current program",
    },
];

/// Bio paragraphs for the "Who I Am" card.
pub const BIO: &[&str] = &[
    "I'm a third year student in Applied Physics & Electrical Engineering who enjoys math, tech, embedded systems and running.",
    "I'm bartending at the student pub VilleValla and always trying new beers. Currently building an embedded wireless ESP32 game.",
];

/// "What Drives Me" card.
pub const DRIVE: &str = "Interested in linear algebra, signal processing, ML and wireless communications. As well as embedded and C++.";

/// Block of a blog post body.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Block {
    Heading(&'static str),
    Subheading(&'static str),
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Code(&'static str),
}

/// Kind of link under a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Github,
    External,
}

/// Link under a post.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PostLink {
    pub kind: LinkKind,
    pub url: &'static str,
    pub label: &'static str,
}

/// Blog post.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BlogPost {
    /// Route segment under `/blog/`
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
    pub body: &'static [Block],
    pub links: &'static [PostLink],
}

impl BlogPost {
    /// Case-insensitive match over title, excerpt and tags.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.excerpt.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    /// Path of the post page.
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "blog1",
        title: "Advanced Signal Processing Techniques",
        excerpt: "Exploring modern signal processing methods and their applications in communication systems.",
        date: "2025-07-16",
        read_time: "8 min read",
        tags: &["Signal Processing", "Mathematics", "DSP"],
        featured: true,
        body: &[
            Block::Heading("Introduction to Advanced Signal Processing"),
            Block::Paragraph(
                "Signal processing forms the backbone of modern communication systems, from the smartphones in our \
                 pockets to the satellites orbiting Earth. This guide explores techniques that change how we process \
                 and analyze signals.",
            ),
            Block::Subheading("Key Concepts"),
            Block::Bullets(&[
                "Adaptive Filtering: algorithms that adjust their parameters in real-time based on incoming data",
                "Spectral Analysis: frequency domain analysis for better signal understanding",
                "Digital Filter Design: creating optimal filters for specific applications",
            ]),
            Block::Subheading("Applications in Modern Systems"),
            Block::Bullets(&[
                "Wireless communication systems",
                "Audio processing and noise cancellation",
                "Radar and sonar systems",
                "Medical signal processing",
            ]),
            Block::Subheading("Mathematical Foundation"),
            Block::Bullets(&[
                "Fourier transforms and their applications",
                "Z-transforms for discrete-time systems",
                "Probability theory for stochastic processes",
                "Linear algebra for multi-dimensional signal processing",
            ]),
            Block::Paragraph(
                "In recent projects I have implemented these concepts in MATLAB and Python, focusing on real-time \
                 processing. The field keeps evolving as new algorithms and hardware arrive.",
            ),
        ],
        links: &[
            PostLink {
                kind: LinkKind::Github,
                url: "https://github.com/AxelSuu/signal-processing-demo",
                label: "View Code",
            },
            PostLink {
                kind: LinkKind::External,
                url: "https://ieeexplore.ieee.org/document/example",
                label: "Research Paper",
            },
        ],
    },
    BlogPost {
        slug: "blog2",
        title: "Machine Learning in Communications",
        excerpt: "How AI and ML are transforming wireless communication systems and network optimization.",
        date: "2025-07-16",
        read_time: "12 min read",
        tags: &["Machine Learning", "Communications", "AI"],
        featured: true,
        body: &[
            Block::Heading("The AI Revolution in Communications"),
            Block::Paragraph(
                "Machine learning is changing how we approach wireless communication systems. From channel \
                 estimation to resource allocation, learned models enable new levels of optimization.",
            ),
            Block::Subheading("Channel Estimation"),
            Block::Bullets(&[
                "Learn complex channel patterns from data",
                "Adapt to changing environments in real-time",
                "Reduce overhead compared to pilot-based methods",
            ]),
            Block::Subheading("Resource Allocation"),
            Block::Bullets(&[
                "Power allocation across multiple users",
                "Spectrum management and interference mitigation",
                "Network slicing and dynamic resource assignment",
            ]),
            Block::Subheading("Deep Learning Architectures"),
            Block::Bullets(&[
                "CNNs for signal classification and interference detection",
                "RNNs for time-series prediction and channel modeling",
                "Reinforcement learning for dynamic network optimization",
            ]),
            Block::Subheading("Challenges"),
            Block::Bullets(&[
                "Real-time processing requirements",
                "Training data availability and quality",
                "Computational complexity constraints",
                "Interpretability and reliability",
            ]),
            Block::Paragraph(
                "As we move towards 6G, machine learning will become even more integral to communication system design.",
            ),
        ],
        links: &[
            PostLink {
                kind: LinkKind::Github,
                url: "https://github.com/AxelSuu/ml-communications",
                label: "Implementation",
            },
            PostLink {
                kind: LinkKind::External,
                url: "https://example.com/ml-comms-paper",
                label: "Related Research",
            },
        ],
    },
    BlogPost {
        slug: "blog3",
        title: "Adaptive Filters and Their Applications",
        excerpt: "Exploring adaptive filtering algorithms and their practical implementations in signal processing.",
        date: "2025-07-16",
        read_time: "10 min read",
        tags: &["Adaptive Filters", "Signal Processing", "Algorithms"],
        featured: false,
        body: &[
            Block::Heading("Understanding Adaptive Filters"),
            Block::Paragraph(
                "Adaptive filters adjust their parameters automatically based on the characteristics of the input \
                 signal, unlike fixed filters.",
            ),
            Block::Subheading("Types of Adaptive Filters"),
            Block::Bullets(&[
                "Least Mean Squares (LMS): simple and robust",
                "Recursive Least Squares (RLS): faster convergence, higher complexity",
                "Normalized LMS: improved stability and performance",
            ]),
            Block::Subheading("Applications"),
            Block::Bullets(&[
                "Noise cancellation systems",
                "Echo cancellation in telecommunications",
                "Equalization in communication channels",
                "System identification and modeling",
            ]),
            Block::Subheading("Implementation Considerations"),
            Block::Bullets(&[
                "Convergence speed vs. stability trade-offs",
                "Computational complexity constraints",
                "Step size selection for optimal performance",
            ]),
        ],
        links: &[PostLink {
            kind: LinkKind::Github,
            url: "https://github.com/AxelSuu/adaptive-filters",
            label: "Source Code",
        }],
    },
    BlogPost {
        slug: "blog4",
        title: "MIMO Systems and Wireless Communications",
        excerpt: "An in-depth look at Multiple-Input Multiple-Output systems and their role in modern wireless.",
        date: "2025-07-16",
        read_time: "6 min read",
        tags: &["MIMO", "Communications", "Wireless"],
        featured: false,
        body: &[
            Block::Heading("MIMO Systems: The Future of Wireless"),
            Block::Paragraph(
                "Multiple-Input Multiple-Output technology is a cornerstone of modern wireless systems, improving \
                 data rates and reliability.",
            ),
            Block::Subheading("Key Techniques"),
            Block::Bullets(&[
                "Spatial Multiplexing: transmitting multiple data streams simultaneously",
                "Diversity: combating fading through redundancy",
                "Beamforming: focusing signal energy in specific directions",
            ]),
            Block::Subheading("Challenges"),
            Block::Bullets(&[
                "Channel estimation complexity",
                "Antenna correlation effects",
                "Hardware impairments",
                "Interference management",
            ]),
        ],
        links: &[PostLink {
            kind: LinkKind::Github,
            url: "https://github.com/AxelSuu/mimo-systems",
            label: "MIMO Simulations",
        }],
    },
    BlogPost {
        slug: "blog5",
        title: "NumPy and SciPy for Signal Processing",
        excerpt: "Comprehensive guide to using Python libraries for digital signal processing applications.",
        date: "2025-07-16",
        read_time: "15 min read",
        tags: &["Python", "DSP", "Programming"],
        featured: false,
        body: &[
            Block::Heading("Python for Signal Processing"),
            Block::Paragraph(
                "NumPy and SciPy form the foundation of scientific computing in Python and cover most everyday DSP work.",
            ),
            Block::Subheading("Essential NumPy Functions"),
            Block::Bullets(&[
                "np.fft for Fast Fourier Transform operations",
                "np.convolve for convolution",
                "np.correlate for correlation analysis",
                "np.random for generating test signals",
            ]),
            Block::Subheading("Digital Filter Design"),
            Block::Code(
                "from scipy import signal\n\nfs = 1000  # Sample rate\nfc = 100   # Cutoff frequency\n\
                 b, a = signal.butter(6, fc / (0.5 * fs), btype='low')\n\
                 filtered_signal = signal.filtfilt(b, a, input_signal)",
            ),
            Block::Subheading("Spectral Analysis"),
            Block::Code("f, Pxx = signal.periodogram(signal_data, fs)"),
            Block::Subheading("Performance Optimization"),
            Block::Bullets(&[
                "Use vectorized operations instead of loops",
                "Leverage NumPy's broadcasting",
                "Consider numba for hot loops",
                "Profile before optimizing",
            ]),
        ],
        links: &[
            PostLink {
                kind: LinkKind::Github,
                url: "https://github.com/AxelSuu/python-dsp-examples",
                label: "Code Examples",
            },
            PostLink {
                kind: LinkKind::External,
                url: "https://scipy.org/docs/",
                label: "SciPy Documentation",
            },
        ],
    },
];

/// Posts matching `query`, in declaration order. Empty query matches all.
pub fn search_posts(query: &str) -> Vec<&'static BlogPost> {
    POSTS.iter().filter(|p| p.matches(query)).collect()
}

/// Split posts into (featured, other).
pub fn split_featured(posts: &[&'static BlogPost]) -> (Vec<&'static BlogPost>, Vec<&'static BlogPost>) {
    posts.iter().partition(|p| p.featured)
}

/// Look a post up by its route slug.
pub fn post_by_slug(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.slug == slug)
}

/// Contact tile.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub detail: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub external: bool,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "LinkedIn",
        detail: "Professional network & updates",
        href: "https://www.linkedin.com/in/axel-sundqvist/",
        icon: Icon::Linkedin,
        external: true,
    },
    ContactLink {
        label: "GitHub",
        detail: "Code and experiments",
        href: "https://github.com/AxelSuu",
        icon: Icon::Github,
        external: true,
    },
];

/// "Good topics to discuss" chips.
pub const TOPICS: &[&str] = &["Internships", "ML Projects", "Embedded"];

/// Navigation entry.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    /// Section id without `#`
    pub anchor: &'static str,
    /// Hidden entries keep their section but get no link
    pub visible: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", anchor: "home", visible: true },
    NavItem { name: "About", anchor: "about", visible: true },
    NavItem { name: "Projects", anchor: "projects", visible: true },
    NavItem { name: "Blog", anchor: "blog", visible: false },
    NavItem { name: "Contact", anchor: "contact", visible: true },
];

/// Entries shown in the navigation bar.
pub fn visible_nav_items() -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS.iter().filter(|n| n.visible)
}

/// Every content table, for JSON export.
#[derive(Debug, Serialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub bio: &'static [&'static str],
    pub drive: &'static str,
    pub projects: &'static [Project],
    pub skills: &'static [Skill],
    pub stats: &'static [Stat],
    pub achievements: &'static [Achievement],
    pub education: &'static [Education],
    pub posts: &'static [BlogPost],
    pub contact: &'static [ContactLink],
    pub topics: &'static [&'static str],
    pub nav: &'static [NavItem],
}

/// Snapshot of all content.
pub fn site() -> SiteContent {
    SiteContent {
        profile: PROFILE,
        bio: BIO,
        drive: DRIVE,
        projects: PROJECTS,
        skills: SKILLS,
        stats: STATS,
        achievements: ACHIEVEMENTS,
        education: EDUCATION,
        posts: POSTS,
        contact: CONTACT_LINKS,
        topics: TOPICS,
        nav: NAV_ITEMS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn search_is_case_insensitive_over_title_excerpt_and_tags() {
        let titles = |q: &str| search_posts(q).iter().map(|p| p.slug).collect::<Vec<_>>();
        assert_eq!(titles("mimo"), vec!["blog4"]);
        assert_eq!(titles("DSP"), vec!["blog1", "blog5"]);
        assert_eq!(titles("network optimization"), vec!["blog2"]);
        assert_eq!(search_posts("   ").len(), POSTS.len());
        assert!(search_posts("quantum gravity").is_empty());
    }

    #[test]
    fn featured_split_preserves_order() {
        let (featured, other) = split_featured(&search_posts(""));
        assert_eq!(
            featured.iter().map(|p| p.slug).collect::<Vec<_>>(),
            vec!["blog1", "blog2"]
        );
        assert_eq!(other.len(), 3);
        assert_eq!(featured_projects().count(), 2);
        assert_eq!(other_projects().count(), 2);
    }

    #[test]
    fn slugs_are_unique_and_resolvable() {
        let slugs: HashSet<_> = POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), POSTS.len());
        assert_eq!(post_by_slug("blog5").unwrap().href(), "/blog/blog5");
        assert!(post_by_slug("missing").is_none());
    }

    #[test]
    fn blog_is_hidden_from_nav() {
        let names: Vec<_> = visible_nav_items().map(|n| n.name).collect();
        assert_eq!(names, vec!["Home", "About", "Projects", "Contact"]);
    }

    #[test]
    fn mailto_greets_first_name() {
        let link = PROFILE.mailto();
        assert!(link.starts_with("mailto:axesu672@student.liu.se?"));
        assert!(link.contains("Hi%20Axel"));
    }

    #[test]
    fn site_serializes() {
        let json = serde_json::to_value(site()).unwrap();
        assert_eq!(json["profile"]["initials"], "AS");
        assert_eq!(json["posts"][4]["body"][5]["type"], "code");
        assert_eq!(json["projects"][0]["icon"], "brain");
    }
}
