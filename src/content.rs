// content.rs

//! Literal portfolio text.

use itertools::Itertools;

use crate::fragment::{skill_bar, Fragment, Line, Tone};
use crate::registry::HelpRow;

const HELP_NAME_WIDTH: usize = 16;

pub fn welcome() -> Fragment {
    Fragment::text("Hey I am Satvik").line(Line::plain("Type 'help' to see available commands"))
}

pub fn help(rows: &[HelpRow]) -> Fragment {
    rows.iter().fold(Fragment::text("Available commands:"), |frag, row| {
        let names = row.names.iter().map(|c| c.name()).join(", ");
        frag.line(
            Line::toned(format!("{:<width$}", names, width = HELP_NAME_WIDTH), Tone::Bright)
                .push("- ", Tone::Plain)
                .push(row.description, row.tone)
                .indent(1),
        )
    })
}

pub fn about() -> Fragment {
    Fragment::new()
        .line(Line::toned("export NAME=\"Satvik Shankar\"", Tone::Yellow))
        .line(Line::toned("export ROLE=\"Full Stack Developer & Finance Enthusiast\"", Tone::Yellow))
        .line(Line::toned("export LOCATION=\"New Delhi, IND → Remote Worldwide\"", Tone::Yellow))
        .line(Line::toned("export EXPERIENCE=\"since childhood\"", Tone::Yellow))
        .blank()
        .line(Line::toned("A Full Stack Developer who:", Tone::Red))
        .line(Line::plain("• Writes code that works on the first try (just kidding, that's impossible)"))
        .line(Line::plain("• Debugs with console.log() like a true artist 🎨"))
        .line(
            Line::plain("• Believes in ")
                .push("\"it works on my machine\"", Tone::Blue)
                .push(" philosophy", Tone::Plain),
        )
        .line(Line::plain("• Created my first website at 17 y/o"))
        .line(Line::plain("• Working on a Micro Finance Startup"))
        .blank()
        .line(Line::toned("Hobbies and interests outside coding:", Tone::Red))
        .line(Line::plain("~/interests/sports → Badminton, Hiking"))
        .line(Line::plain("~/interests/music → Guitar, Piano"))
        .line(Line::plain("~/interests/adventure → Travel, Photography, Sky Diving"))
        .line(Line::plain("~/interests/games → Strategy games, Tennis"))
        .line(Line::toned("More Me:", Tone::Red))
        .line(Line::plain("• Freelance video editor and developer"))
        .line(Line::plain("• Capture moments through photography as a hobby"))
        .line(Line::plain("• Learning Spanish"))
        .blank()
        .line(Line::toned(
            "console.log(\"Fun fact: I have 99 problems, but a bug ain't one... wait, that's a lie.\");",
            Tone::Green,
        ))
}

pub fn projects() -> Fragment {
    Fragment::text("My Projects:")
        .blank()
        .line(
            Line::plain("📱 ")
                .push("E-Commerce Platform", Tone::Blue)
                .push(" - Full-stack React/Node.js application", Tone::Plain),
        )
        .line(
            Line::plain("🌐 ")
                .push("Portfolio Website", Tone::Green)
                .push(" - This terminal-style portfolio you're viewing", Tone::Plain),
        )
        .line(
            Line::plain("🔧 ")
                .push("DevOps Automation Tools", Tone::Yellow)
                .push(" - CI/CD pipeline optimization scripts", Tone::Plain),
        )
        .line(
            Line::plain("📊 ")
                .push("Data Visualization Dashboard", Tone::Purple)
                .push(" - Interactive analytics platform", Tone::Plain),
        )
        .line(
            Line::plain("🎮 ")
                .push("Game Development", Tone::Red)
                .push(" - Various indie game projects", Tone::Plain),
        )
        .blank()
        .line(Line::plain("Visit my GitHub to see more projects and contributions!"))
}

const SKILL_GROUPS: &[(&str, &[(&str, u8)])] = &[
    (
        "Languages:",
        &[("JavaScript/TypeScript", 95), ("Python", 85), ("Java", 70), ("Go", 60)],
    ),
    (
        "Frontend:",
        &[("React/Next.js", 95), ("Vue.js", 75), ("HTML5/CSS3", 90), ("Tailwind CSS", 85)],
    ),
    (
        "Backend:",
        &[("Node.js/Express", 90), ("Python/Django", 80), ("PostgreSQL/MongoDB", 75)],
    ),
    (
        "DevOps & Tools:",
        &[("Docker/Kubernetes", 75), ("AWS/GCP", 70), ("Git/GitHub", 95)],
    ),
];

pub fn skills() -> Fragment {
    let header = Fragment::new()
        .line(Line::plain("📁 ").push("Technical Skills:", Tone::Yellow))
        .blank();
    SKILL_GROUPS.iter().fold(header, |frag, (title, skills)| {
        skills.iter().fold(frag.line(Line::toned(*title, Tone::Blue)), |frag, (name, pct)| {
            frag.line(skill_bar(name, *pct).indent(1))
        })
    })
}

pub fn contact() -> Fragment {
    Fragment::new()
        .line(Line::plain("📞 ").push("Get In Touch:", Tone::Yellow))
        .blank()
        .line(Line::plain("📧 ").push("Email:", Tone::Bright).push(" jason.myers@email.com", Tone::Plain))
        .line(
            Line::plain("💼 ")
                .push("LinkedIn:", Tone::Bright)
                .push(" linkedin.com/in/jasonmyers", Tone::Plain),
        )
        .line(Line::plain("🐙 ").push("GitHub:", Tone::Bright).push(" github.com/jasonmyers", Tone::Plain))
        .line(Line::plain("🐦 ").push("Twitter:", Tone::Bright).push(" @jasonmyers_dev", Tone::Plain))
        .line(Line::plain("🌐 ").push("Website:", Tone::Bright).push(" jasonmyers.dev", Tone::Plain))
        .blank()
        .line(Line::plain("I'm always open to discussing new opportunities,"))
        .line(Line::plain("collaborations, or just having a chat about technology!"))
        .blank()
        .line(Line::plain("Response time: Usually within 24 hours ⚡"))
}

pub fn experience() -> Fragment {
    Fragment::text("Work Experience:")
        .blank()
        .line(
            Line::toned("Senior Full Stack Developer", Tone::Blue)
                .push(" | TechCorp Inc. (2022-Present)", Tone::Plain),
        )
        .line(Line::plain("• Led development of microservices architecture"))
        .line(Line::plain("• Mentored junior developers and conducted code reviews"))
        .line(Line::plain("• Improved application performance by 40%"))
        .blank()
        .line(Line::toned("Full Stack Developer", Tone::Green).push(" | StartupXYZ (2020-2022)", Tone::Plain))
        .line(Line::plain("• Built scalable web applications from scratch"))
        .line(Line::plain("• Implemented CI/CD pipelines and DevOps practices"))
        .line(Line::plain("• Collaborated with cross-functional teams"))
        .blank()
        .line(Line::toned("Frontend Developer", Tone::Yellow).push(" | WebSolutions (2018-2020)", Tone::Plain))
        .line(Line::plain("• Developed responsive user interfaces"))
        .line(Line::plain("• Optimized web performance and accessibility"))
        .line(Line::plain("• Worked with modern JavaScript frameworks"))
}

pub fn education() -> Fragment {
    Fragment::text("Academic Background:")
        .blank()
        .line(Line::toned("Bachelor of Science in Computer Science", Tone::Blue))
        .line(Line::plain("University of Technology | 2014-2018"))
        .line(Line::plain("• Graduated Magna Cum Laude (GPA: 3.8/4.0)"))
        .line(Line::plain("• Relevant Coursework: Data Structures, Algorithms, Software Engineering"))
        .blank()
        .line(Line::toned("Certifications:", Tone::Green))
        .line(Line::plain("• AWS Certified Solutions Architect"))
        .line(Line::plain("• Google Cloud Professional Developer"))
        .line(Line::plain("• Certified Kubernetes Administrator (CKA)"))
        .blank()
        .line(Line::toned("Continuous Learning:", Tone::Yellow))
        .line(Line::plain("• Regular participation in tech conferences and workshops"))
        .line(Line::plain("• Active contributor to open-source projects"))
        .line(Line::plain("• Mentor at local coding bootcamps"))
}

pub fn github() -> Fragment {
    Fragment::new()
        .line(Line::plain("🐙 ").push("Opening GitHub profile...", Tone::Green))
        .line(Line::toned("https://github.com/jasonmyers", Tone::Link))
        .line(Line::plain("Check out my repositories and contributions!"))
}

pub fn linkedin() -> Fragment {
    Fragment::new()
        .line(Line::plain("💼 ").push("Opening LinkedIn profile...", Tone::Green))
        .line(Line::toned("https://linkedin.com/in/jasonmyers", Tone::Link))
        .line(Line::plain("Let's connect professionally!"))
}

pub fn resume() -> Fragment {
    Fragment::new()
        .line(Line::plain("📄 ").push("Downloading resume...", Tone::Blue))
        .line(Line::plain("Resume downloaded successfully!"))
        .line(Line::plain("Thank you for your interest in my background."))
}

pub fn exit() -> Fragment {
    Fragment::text("Goodbye! May your code compile and your bugs be few!")
}

pub fn joke() -> Fragment {
    Fragment::text("Really? You here for jokes?")
}
