//! Static content records for the page sections.
//!
//! The animation layer never reads these fields directly; it only consumes
//! the DOM elements the web layer renders them into (plus the 0–100 level
//! for each skill bar).

pub struct HeroCopy {
    pub subtitle: &'static str,
    pub title_lines: &'static [&'static str],
    pub description: &'static str,
    pub role_lines: &'static [&'static str],
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    subtitle: "< Shane Brown />",
    title_lines: &["Web Developer &", "Cybersecurity Specialist"],
    description: "From wiring buildings to writing code. I build secure websites \
                  and develop AI tools that solve real problems.",
    role_lines: &[
        "Web Developer at Diné College, IT & Marketing Department",
        "Sinister Gate Designs LLC • Tsaile, Arizona",
    ],
    cta_label: "View My Work",
    cta_href: "#projects",
};

pub const BIOGRAPHY: &[&str] = &[
    "I spent 20 years as an electrician before I got bit by the coding bug. \
     Started as a custodian at Diné College while studying cybersecurity at ASU. \
     Now I manage production websites and build security tools.",
    "The technical thinking from electrical work translates to code. \
     Problem solving stays the same. The tools change.",
    "I run Sinister Gate Designs LLC. I provide cybersecurity consulting and web \
     development for clients who need both speed and security.",
    "Currently studying Cybersecurity at Arizona State University. Working toward \
     Security+ certification. Learning by building real projects that solve actual problems.",
    "Background: Former lead singer in a metal band during high school. 20+ years as an \
     electrician across residential, commercial, and industrial projects. Worked in data \
     centers, hospitals, semiconductor factories, and cleanrooms. Transitioned to tech \
     through ASU's Cybersecurity Bootcamp in 2024.",
];

pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        value: "20+",
        label: "Years Experience",
    },
    Highlight {
        value: "ASU",
        label: "Cybersecurity Graduate",
    },
];

pub struct ExperienceEntry {
    pub position: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub dates: &'static str,
    pub responsibilities: &'static [&'static str],
}

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        position: "Web Developer",
        company: "Diné College, IT & Marketing Department",
        location: "Tsaile, Arizona",
        dates: "2024 - Present",
        responsibilities: &[
            "Manage dinecollege.edu and institutional websites",
            "Rebuild and maintain 50+ pages after WordPress core updates",
            "Design interactive pages for Student Activities, Alumni, and donations",
            "Configure Google Analytics tracking and generate marketing reports",
            "Provide technical and media support for live campus events",
            "Collaborate across departments to deliver web solutions",
            "Create formal documentation for performance reviews and impact reports",
        ],
    },
    ExperienceEntry {
        position: "Freelance IT Support & Cybersecurity Consultant",
        company: "Sinister Gate Designs LLC",
        location: "Tsaile, Arizona",
        dates: "2024 - Present",
        responsibilities: &[
            "Provide cybersecurity assessments for small businesses",
            "Conduct vulnerability assessments using Nessus and Wireshark",
            "Develop AI-driven security automation tools",
            "Implement firewall configurations and endpoint security",
            "Design and deploy secure websites with best security practices",
            "Develop AI chatbots using OpenAI API",
            "Build client websites for multiple industries",
            "Apply SIEM tools and Python automation for security operations",
        ],
    },
    ExperienceEntry {
        position: "Electrician",
        company: "Union Hall Local 401",
        location: "Reno, Nevada",
        dates: "2019 - 2023",
        responsibilities: &[
            "Troubleshoot and repair electrical systems for data centers",
            "Minimize operational downtime through efficient problem solving",
            "Collaborate with multidisciplinary teams on infrastructure projects",
            "Manage electrical tools and technologies for project execution",
        ],
    },
    ExperienceEntry {
        position: "Journeyman Electrician & QA Specialist",
        company: "Various",
        location: "Various",
        dates: "2014 - 2019",
        responsibilities: &[
            "Set up IT-related electrical systems in cleanrooms and commercial settings",
            "Conduct QA/QC inspections for technical specification compliance",
            "Provide mentorship and technical guidance to junior team members",
        ],
    },
    ExperienceEntry {
        position: "Apprentice to Journeyman Electrician",
        company: "Various",
        location: "Various",
        dates: "2002 - 2013",
        responsibilities: &[
            "Trained in residential, industrial, and commercial electrical work",
            "Worked in clean spaces with strict safety and hygiene standards",
            "Performed electrical work in hospitals and semiconductor factories",
            "Developed expertise in troubleshooting complex electrical systems",
            "Ensured electrical code compliance and safety procedures",
        ],
    },
];

pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub status: &'static str,
    pub year: &'static str,
}

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "Cybersecurity",
        institution: "Arizona State University",
        status: "Current",
        year: "2024 - Present",
    },
    EducationEntry {
        degree: "Cybersecurity Bootcamp",
        institution: "Arizona State University",
        status: "Completed",
        year: "2024",
    },
    EducationEntry {
        degree: "High School Diploma",
        institution: "Chinle High School",
        status: "Completed",
        year: "2002",
    },
];

pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Google Cybersecurity Professional Certificate",
        issuer: "Coursera",
        year: "2025",
    },
    Certification {
        name: "Cisco Cybersecurity Pathway",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco Cyber Threat Management",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco Network Defense",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco Ethical Hacking",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco JavaScript Essentials 1 & 2",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco Python Essentials 1 & 2",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco Endpoint Security",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco Networking Basics",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco Data Analytics Essentials",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco Operating Systems Basics",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco Computer Hardware Basics",
        issuer: "Cisco",
        year: "2025",
    },
    Certification {
        name: "Cisco Introduction to Cybersecurity",
        issuer: "Cisco",
        year: "2025",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [Skill],
}

macro_rules! skills {
    ($(($name:expr, $level:expr)),* $(,)?) => {
        &[$(Skill { name: $name, level: $level }),*]
    };
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        category: "Cloud & Infrastructure",
        skills: skills![
            ("AWS (VPC, EC2, IAM, S3)", 85),
            ("CloudWatch, KMS, Secrets Manager", 80),
            ("GuardDuty, CloudTrail, SNS", 80),
            ("Aurora, DynamoDB", 75),
            ("Azure, Oracle Cloud", 70),
            ("VPC Peering, VPC Endpoints", 80),
            ("VPC Flow Logs, AWS CLI", 85),
            ("CloudShell", 80),
        ],
    },
    SkillCategory {
        category: "Networking",
        skills: skills![
            ("CIDR Notation", 85),
            ("Route Tables, Internet Gateways", 85),
            ("NAT, Security Groups", 85),
            ("Network ACLs", 80),
            ("Traffic Routing", 80),
            ("Network Isolation", 80),
            ("Multi-VPC Architecture", 75),
            ("Cisco Networking Fundamentals", 70),
        ],
    },
    SkillCategory {
        category: "Security & Penetration Testing",
        skills: skills![
            ("IAM Policy Design", 85),
            ("Least-Privilege Enforcement", 85),
            ("AWS KMS Encryption", 80),
            ("Secrets Management", 85),
            ("Threat Detection", 80),
            ("Security Monitoring", 80),
            ("Defense in Depth", 80),
            ("Kali Linux, Parrot OS", 75),
            ("Wireshark, Nmap, Burp Suite", 75),
            ("Splunk, Nessus", 70),
            ("IDS, Vulnerability Assessment", 75),
            ("Risk Management", 80),
            ("Firewall Configuration", 80),
            ("Endpoint Security", 75),
        ],
    },
    SkillCategory {
        category: "Databases",
        skills: skills![
            ("Amazon Aurora (MySQL)", 80),
            ("DynamoDB", 75),
            ("NoSQL Data Modeling", 75),
            ("Query Optimization", 80),
            ("Database-to-Application Integration", 80),
            ("Partition Keys, Sort Keys", 75),
            ("Database Transactions", 80),
            ("SQL", 85),
        ],
    },
    SkillCategory {
        category: "Development & Programming",
        skills: skills![
            ("JavaScript", 90),
            ("Python", 85),
            ("HTML5", 95),
            ("CSS3", 90),
            ("Bash", 80),
            ("PHP", 75),
            ("React.js", 85),
            ("Node.js", 80),
            ("Express", 75),
            ("Astro.js", 70),
            ("Vite", 85),
            ("GSAP", 80),
            ("Three.js", 75),
            (".NET Blazor", 70),
        ],
    },
    SkillCategory {
        category: "Web & CMS",
        skills: skills![
            ("WordPress", 90),
            ("Elementor Pro", 85),
            ("Custom CSS/JS Integration", 90),
            ("Google Analytics", 85),
            ("Responsive Design", 90),
            ("Performance Optimization", 85),
        ],
    },
    SkillCategory {
        category: "AI & Automation",
        skills: skills![
            ("OpenAI API", 80),
            ("Gemini AI", 75),
            ("Prompt Engineering", 80),
            ("AI Chatbot Development", 75),
            ("Web Scraping", 70),
            ("Automation Scripting", 80),
            ("AI-Driven Security Automation", 75),
        ],
    },
    SkillCategory {
        category: "Tools & Workflows",
        skills: skills![
            ("Git/GitHub", 85),
            ("VSCode", 90),
            ("Postman", 80),
            ("Figma", 75),
            ("Linux Command Line", 85),
            ("SSH", 85),
            ("VirtualBox", 75),
            ("Docker", 75),
            ("Markdown", 90),
            ("Technical Documentation", 85),
            ("YOLOBox (Live Streaming)", 80),
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub status: &'static str,
    pub link: Option<&'static str>,
    pub image: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Diné College Website Management",
        description: "Manage dinecollege.edu as Web Developer in IT & Marketing. Rebuilt all \
                      widgets after WordPress core update broke functionality. Audited and fixed \
                      50+ pages. Redesigned Student Activities page with interactive elements. \
                      Built Alumni and donation flow pages. Configured Google Analytics tracking.",
        tags: &[
            "WordPress",
            "Elementor Pro",
            "Custom CSS/JS",
            "Google Analytics",
            "YOLOBox",
        ],
        status: "Production (2024-Present)",
        link: Some("https://dinecollege.edu"),
        image: "assets/projects/dine-college.png",
    },
    Project {
        title: "AWS Cloud Security Portfolio",
        description: "Built security-focused AWS projects demonstrating threat detection, \
                      encryption, and monitoring. Designed least-privilege IAM policies. \
                      Implemented AWS KMS for data encryption. Migrated hardcoded credentials to \
                      AWS Secrets Manager. Built CloudTrail + CloudWatch + SNS alert pipeline.",
        tags: &[
            "AWS",
            "IAM",
            "KMS",
            "Secrets Manager",
            "GuardDuty",
            "CloudTrail",
            "DynamoDB",
            "Python",
        ],
        status: "Complete",
        link: Some("https://github.com/shanebrown848/AWS-cloud-security-portfolio"),
        image: "assets/projects/security-trophy.png",
    },
    Project {
        title: "AWS Networking Projects Portfolio",
        description: "Built complete AWS networking portfolio demonstrating enterprise-level \
                      cloud architecture. Designed and deployed custom VPC environments with \
                      public and private subnets. Established VPC Peering connections between \
                      isolated networks. Enabled VPC Flow Logs for traffic analysis.",
        tags: &[
            "AWS",
            "VPC",
            "EC2",
            "S3",
            "CloudWatch",
            "Security Groups",
            "CIDR",
        ],
        status: "Complete",
        link: Some("https://github.com/shanebrown848/AWS-Networking-Projects-Portfolio"),
        image: "assets/projects/networking-trophy.png",
    },
    Project {
        title: "AWS Databases Portfolio",
        description: "Built relational and NoSQL database solutions integrated with cloud \
                      applications. Deployed managed Aurora MySQL databases connected to EC2 \
                      instances. Created DynamoDB tables with proper capacity planning. \
                      Implemented DynamoDB transactions.",
        tags: &[
            "AWS",
            "Aurora MySQL",
            "DynamoDB",
            "EC2",
            "PHP",
            "SQL",
            "AWS CLI",
        ],
        status: "Complete",
        link: Some("https://github.com/shanebrown848/AWS-databases-portfolio"),
        image: "assets/projects/database-trophy.png",
    },
    Project {
        title: "Interactive 3D Campus Maps",
        description: "Building 3D rendered campus maps for Diné College graduation events. \
                      Creating interactive hotspots with clickable navigation. Collaborating \
                      with professional photographers and drone pilots for 3D assets.",
        tags: &["GSAP", "Three.js", "JavaScript", "React"],
        status: "In Progress",
        link: Some("https://marketingteamdinecollege.com/"),
        image: "assets/projects/campus-map.png",
    },
    Project {
        title: "AI Security Scanner",
        description: "Built threat detection tool powered by Gemini AI. Automates vulnerability \
                      identification. Integrates security awareness into development workflow. \
                      Designed for small businesses needing automated security assessments.",
        tags: &["Gemini AI", "Python", "OpenAI API"],
        status: "Active Development",
        link: Some("https://github.com/shanebrown848/AI-Security-Scanner-with-Gemini"),
        image: "assets/projects/ai-scanner.png",
    },
    Project {
        title: "CyberSentinel AI",
        description: "Developed AI-powered SOC assistant for threat analysis. Created automated \
                      incident response workflows. Provides real-time security recommendations \
                      for network defense.",
        tags: &["OpenAI API", "Python", "SIEM"],
        status: "Active Development",
        link: None,
        image: "assets/projects/cybersentinel.png",
    },
    Project {
        title: "TheEchoedMelodies.com",
        description: "Music review site covering underground metal. Personal project combining \
                      web development skills with music journalism. Features album reviews, band \
                      interviews, and scene coverage.",
        tags: &["WordPress", "Custom Theme Development"],
        status: "Active",
        link: Some("https://theechoedmelodies.com"),
        image: "assets/projects/echoed-melodies.png",
    },
    Project {
        title: "Client Web Development Projects",
        description: "Building secure, fast websites for multiple clients including LW Safety, \
                      Alumni site rebuilds, Dre Creations, and Nest of Tucson. Focus on \
                      responsive design, performance optimization, and security best practices.",
        tags: &["WordPress", "Elementor", "React", "JavaScript"],
        status: "Ongoing",
        link: None,
        image: "assets/projects/client-work.png",
    },
    Project {
        title: "DevOps Capstone Project",
        description: "Completed capstone demonstrating full DevOps workflow including CI/CD \
                      pipelines, containerization, and cloud deployment.",
        tags: &["Python", "Docker", "CI/CD"],
        status: "Complete",
        link: Some("https://github.com/shanebrown848/devops-capstone-project"),
        image: "assets/projects/devops-capstone.png",
    },
];
