//! Static page content. Editing the site means editing these tables.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub href: &'static str,
    pub repo: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Ankit Khatiwada",
    github: "https://github.com/ankitkhatiwada",
    linkedin: "https://www.linkedin.com/in/ankit-khatiwada-4916bb278",
    resume: "/resume.pdf",
};

pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "projects", label: "Projects" },
    Section { id: "experience", label: "Experience" },
    Section { id: "skills", label: "Skills" },
    Section { id: "contact", label: "Contact" },
];

pub const QUICK_FACTS: &[&str] = &[
    "Based in Vancouver",
    "Cybersecurity Enthusiast",
    "Hands-on Learner",
    "Open to Co-op",
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Vulnerability Assessment Lab",
        blurb: "Hands-on assessment of vulnerable systems using Nmap, Metasploit, and Kali Linux tools.",
        tags: &["Nmap", "Metasploit", "Kali Linux", "Exploit Testing"],
        href: "#",
        repo: "#",
    },
    Project {
        title: "Log Analysis & Threat Hunting",
        blurb: "Analyzed server and application logs to detect malicious patterns and potential intrusions.",
        tags: &["Threat Hunting", "Log Analysis", "Linux", "IDS/IPS Basics"],
        href: "#",
        repo: "#",
    },
    Project {
        title: "Secure Web Server Deployment",
        blurb: "Configured and hardened an Apache web server with SSL/TLS and firewall rules.",
        tags: &["Apache", "Linux", "SSL/TLS", "Firewall"],
        href: "#",
        repo: "#",
    },
    Project {
        title: "Networking Labs — Cisco Packet Tracer",
        blurb: "Configured OSPF multi-area networks, port security, VLANs, and ACLs in Cisco Packet Tracer.",
        tags: &["Cisco", "OSPF", "VLANs", "Port Security"],
        href: "#",
        repo: "#",
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "CCTB — Cybersecurity Labs",
        role: "Cybersecurity Student",
        period: "2025",
        points: &[
            "Conducted vulnerability assessments with Kali Linux and Metasploit.",
            "Performed log analysis and threat hunting using security tools.",
            "Configured and secured Linux web servers with SSL/TLS and firewall rules.",
        ],
    },
    Experience {
        company: "Networking Labs",
        role: "Cisco Packet Tracer Projects",
        period: "2024-2025",
        points: &[
            "Configured OSPF in multi-area enterprise networks.",
            "Implemented port security, sticky MAC, and violation modes.",
            "Designed VLANs and applied ACLs for network segmentation.",
        ],
    },
    Experience {
        company: "ITED Foundation — Project AURA",
        role: "Developer",
        period: "2025",
        points: &[
            "Designed Firebase Realtime Database schema with secure RBAC.",
            "Built Python + Flask backend to process Excel data and generate alerts.",
            "Integrated admin/operator dashboards with real-time alert display.",
            "Automated Word/Excel transcript generation.",
            "Implemented security rules & audit logging.",
        ],
    },
];

pub const SKILLS: &[&str] = &[
    "Networking (Cisco, OSPF, VLANs, Port Security)",
    "Kali Linux",
    "Metasploit",
    "Nmap",
    "Wireshark",
    "Firewall Configuration",
    "IDS/IPS Basics",
    "Vulnerability Assessment",
    "Log Analysis & Threat Hunting",
    "Password Cracking & Security",
    "Secure Web Server Deployment",
    "Linux Administration",
    "Git/GitHub",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;

    #[test]
    fn test_section_ids_are_unique() {
        let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
        assert_eq!(SECTIONS[0].anchor(), "#home");
        assert!(SECTIONS.iter().any(|s| s.id == "contact"));
    }

    #[test]
    fn test_titles_are_unique_keys() {
        let titles: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
        let companies: HashSet<_> = EXPERIENCES.iter().map(|e| e.company).collect();
        assert_eq!(companies.len(), EXPERIENCES.len());
    }
}
