//! The portfolio pages.
//!
//! Everything here is static presentation data; none of it feeds back
//! into tree or tab state. Pages are rebuilt per render from the theme,
//! so palette downgrades apply uniformly.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::app::theme::UiTheme;
use crate::models::Location;
use crate::services::content::{ContentKind, Page};

pub fn page_for(location: &Location, theme: &UiTheme) -> Option<Page> {
    match location.as_str() {
        "/home" => Some(home(theme)),
        "/about" => Some(about(theme)),
        "/skills" => Some(skills(theme)),
        "/experience" => Some(experience(theme)),
        "/education" => Some(education(theme)),
        "/contact" => Some(contact(theme)),
        other => PROJECTS
            .iter()
            .find(|p| p.location == other)
            .map(|p| project(p, theme)),
    }
}

pub fn not_found(location: &Location, theme: &UiTheme) -> Page {
    let comment = Style::default().fg(theme.syntax_comment_fg);
    let body = Text::from(vec![
        Line::from(Span::styled(
            "// The requested document is not part of this workspace.",
            comment,
        )),
        Line::from(Span::styled(
            "// Pick a file from the explorer instead.",
            comment,
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("location: ", Style::default().fg(theme.text)),
            Span::styled(
                format!("\"{location}\""),
                Style::default().fg(theme.syntax_string_fg),
            ),
        ]),
    ]);
    Page {
        heading: "404".to_string(),
        animate_heading: false,
        kind: ContentKind::PlainText,
        body,
    }
}

fn breadcrumb(path: &str, theme: &UiTheme) -> Line<'static> {
    Line::from(Span::styled(
        format!("~/portfolio{path}"),
        Style::default().fg(theme.text_secondary),
    ))
}

fn plain(text: impl Into<String>, theme: &UiTheme) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(theme.text)))
}

fn section(text: impl Into<String>, theme: &UiTheme) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(theme.text_active)
            .add_modifier(Modifier::BOLD),
    ))
}

fn bullet(text: impl Into<String>, theme: &UiTheme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(theme.accent)),
        Span::styled(text.into(), Style::default().fg(theme.text)),
    ])
}

fn home(theme: &UiTheme) -> Page {
    let kw = Style::default().fg(theme.syntax_keyword_fg);
    let var = Style::default().fg(theme.syntax_variable_fg);
    let string = Style::default().fg(theme.syntax_string_fg);
    let num = Style::default().fg(theme.syntax_number_fg);
    let text = Style::default().fg(theme.text);

    let mut lines = vec![
        breadcrumb("/home.jsx", theme),
        Line::default(),
        Line::from(vec![
            Span::styled("Full stack developer crafting ", text),
            Span::styled("fast", Style::default().fg(theme.accent)),
            Span::styled(" and ", text),
            Span::styled("friendly", Style::default().fg(theme.accent)),
            Span::styled(" software, from web apps to terminal tools.", text),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("const ", kw),
            Span::styled("developer", var),
            Span::styled(" = {", text),
        ]),
        Line::from(vec![
            Span::styled("  name: ", text),
            Span::styled("\"Asha Verma\"", string),
            Span::styled(",", text),
        ]),
        Line::from(vec![
            Span::styled("  role: ", text),
            Span::styled("\"Software Engineer\"", string),
            Span::styled(",", text),
        ]),
        Line::from(vec![
            Span::styled("  passion: ", text),
            Span::styled("[", text),
            Span::styled("\"Rust\"", string),
            Span::styled(", ", text),
            Span::styled("\"TypeScript\"", string),
            Span::styled(", ", text),
            Span::styled("\"AI/ML\"", string),
            Span::styled("],", text),
        ]),
        Line::from(vec![
            Span::styled("  available: ", text),
            Span::styled("true", num),
        ]),
        Line::from(Span::styled("};", text)),
        Line::default(),
    ];
    lines.push(Line::from(vec![
        Span::styled("  » ", Style::default().fg(theme.accent)),
        Span::styled("github.com/ashaverma", Style::default().fg(theme.text_secondary)),
        Span::styled("    » ", Style::default().fg(theme.accent)),
        Span::styled("asha@example.dev", Style::default().fg(theme.text_secondary)),
    ]));

    Page {
        heading: "Hi, I'm Asha Verma".to_string(),
        animate_heading: true,
        kind: ContentKind::JavaScriptJsx,
        body: Text::from(lines),
    }
}

fn about(theme: &UiTheme) -> Page {
    let lines = vec![
        breadcrumb("/README.md", theme),
        Line::default(),
        Line::from(Span::styled(
            "## About",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        plain(
            "Software engineer with a soft spot for developer tooling. I like",
            theme,
        ),
        plain(
            "building products end to end: data model first, pixels last.",
            theme,
        ),
        Line::default(),
        Line::from(Span::styled(
            "## Currently",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        bullet("Shipping full stack web applications in React and Node", theme),
        bullet("Exploring systems programming in Rust", theme),
        bullet("Mentoring first-time open source contributors", theme),
        Line::default(),
        Line::from(Span::styled(
            "## Elsewhere",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        bullet("github.com/ashaverma", theme),
        bullet("linkedin.com/in/ashaverma", theme),
    ];
    Page {
        heading: "README".to_string(),
        animate_heading: false,
        kind: ContentKind::Markdown,
        body: Text::from(lines),
    }
}

struct Skill {
    name: &'static str,
    level: u8,
    tags: &'static [&'static str],
}

const SKILLS: &[Skill] = &[
    Skill { name: "Frontend", level: 90, tags: &["React", "TypeScript", "Tailwind"] },
    Skill { name: "Backend", level: 85, tags: &["Node.js", "Express", "PostgreSQL"] },
    Skill { name: "Systems", level: 70, tags: &["Rust", "C++", "Linux"] },
    Skill { name: "ML & Data", level: 65, tags: &["Python", "PyTorch", "Pandas"] },
    Skill { name: "DevOps", level: 60, tags: &["Docker", "GitHub Actions", "AWS"] },
];

fn gauge(level: u8, theme: &UiTheme) -> Span<'static> {
    const WIDTH: usize = 24;
    let filled = (level as usize * WIDTH) / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(WIDTH - filled));
    Span::styled(bar, Style::default().fg(theme.accent))
}

fn skills(theme: &UiTheme) -> Page {
    let mut lines = vec![breadcrumb("/skills.jsx", theme), Line::default()];
    for skill in SKILLS {
        lines.push(section(skill.name, theme));
        lines.push(Line::from(vec![
            Span::raw("  "),
            gauge(skill.level, theme),
            Span::styled(
                format!(" {}%", skill.level),
                Style::default().fg(theme.text_secondary),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", skill.tags.join(" · ")),
            Style::default().fg(theme.text_secondary),
        )));
        lines.push(Line::default());
    }
    Page {
        heading: "Skills".to_string(),
        animate_heading: false,
        kind: ContentKind::JavaScriptJsx,
        body: Text::from(lines),
    }
}

fn experience(theme: &UiTheme) -> Page {
    let lines = vec![
        breadcrumb("/experience.jsx", theme),
        Line::default(),
        section("Associate Software Engineer · Northwind Labs", theme),
        Line::from(Span::styled(
            "  2024 — present",
            Style::default().fg(theme.text_secondary),
        )),
        bullet("Own the customer dashboard, a React + Node monorepo", theme),
        bullet("Cut p95 page load from 3.1s to 900ms", theme),
        Line::default(),
        section("Software Engineering Intern · Brightpath", theme),
        Line::from(Span::styled(
            "  2023 — 2024",
            Style::default().fg(theme.text_secondary),
        )),
        bullet("Built internal CLI tooling adopted by three teams", theme),
        bullet("Wrote the integration test harness for the billing service", theme),
    ];
    Page {
        heading: "Experience".to_string(),
        animate_heading: false,
        kind: ContentKind::JavaScriptJsx,
        body: Text::from(lines),
    }
}

fn education(theme: &UiTheme) -> Page {
    let lines = vec![
        breadcrumb("/education.jsx", theme),
        Line::default(),
        section("B.Tech, Computer Science (Data Science)", theme),
        Line::from(Span::styled(
            "  State Institute of Technology · 2021 — 2025",
            Style::default().fg(theme.text_secondary),
        )),
        bullet("Coursework: distributed systems, ML, compilers", theme),
        bullet("Led the open source society, 120+ members", theme),
        Line::default(),
        section("Certifications", theme),
        bullet("AWS Cloud Practitioner", theme),
        bullet("Deep Learning Specialization", theme),
    ];
    Page {
        heading: "Education".to_string(),
        animate_heading: false,
        kind: ContentKind::JavaScriptJsx,
        body: Text::from(lines),
    }
}

fn contact(theme: &UiTheme) -> Page {
    let string = Style::default().fg(theme.syntax_string_fg);
    let text = Style::default().fg(theme.text);
    let lines = vec![
        breadcrumb("/contact.jsx", theme),
        Line::default(),
        Line::from(Span::styled(
            "// Always happy to talk about interesting problems.",
            Style::default().fg(theme.syntax_comment_fg),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("  email:    ", text),
            Span::styled("\"asha@example.dev\"", string),
        ]),
        Line::from(vec![
            Span::styled("  github:   ", text),
            Span::styled("\"github.com/ashaverma\"", string),
        ]),
        Line::from(vec![
            Span::styled("  linkedin: ", text),
            Span::styled("\"linkedin.com/in/ashaverma\"", string),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "  response time: usually within a day",
            Style::default().fg(theme.text_secondary),
        )),
    ];
    Page {
        heading: "Contact".to_string(),
        animate_heading: false,
        kind: ContentKind::JavaScriptJsx,
        body: Text::from(lines),
    }
}

struct Project {
    location: &'static str,
    name: &'static str,
    file: &'static str,
    category: &'static str,
    kind: ContentKind,
    summary: &'static str,
    tech: &'static [&'static str],
    highlights: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        location: "/projects/frontend/1",
        name: "Lumenly",
        file: "/projects/frontend/Lumenly.jsx",
        category: "Frontend",
        kind: ContentKind::JavaScriptJsx,
        summary: "Marketing site builder with live preview and shareable themes.",
        tech: &["React", "Vite", "Tailwind"],
        highlights: &[
            "Drag-free layout model: sections compose like code",
            "Sub-second hot preview across browser tabs",
        ],
    },
    Project {
        location: "/projects/frontend/2",
        name: "PixelBoard",
        file: "/projects/frontend/PixelBoard.jsx",
        category: "Frontend",
        kind: ContentKind::JavaScriptJsx,
        summary: "Collaborative pixel canvas with playback of drawing history.",
        tech: &["React", "Canvas API", "WebSockets"],
        highlights: &[
            "60fps canvas rendering with dirty-region tracking",
            "History scrubber replays any five-minute window",
        ],
    },
    Project {
        location: "/projects/backend/1",
        name: "RestHive",
        file: "/projects/backend/RestHive.js",
        category: "Backend",
        kind: ContentKind::JavaScript,
        summary: "Schema-first REST framework with generated validation.",
        tech: &["Node.js", "Express", "Zod"],
        highlights: &[
            "Route handlers derive their types from the schema",
            "Request validation errors map to RFC 7807 responses",
        ],
    },
    Project {
        location: "/projects/fullstack/1",
        name: "CampusERP",
        file: "/projects/fullstack/CampusERP.jsx",
        category: "Full Stack",
        kind: ContentKind::JavaScriptJsx,
        summary: "Hostel and mess management for a 2,000-student campus.",
        tech: &["React", "Node.js", "PostgreSQL"],
        highlights: &[
            "Role-based dashboards for students, wardens and admin",
            "Nightly reconciliation jobs with audit trails",
        ],
    },
    Project {
        location: "/projects/fullstack/2",
        name: "BookBarn",
        file: "/projects/fullstack/BookBarn.jsx",
        category: "Full Stack",
        kind: ContentKind::JavaScriptJsx,
        summary: "Second-hand textbook marketplace with escrow payments.",
        tech: &["Next.js", "Prisma", "Stripe"],
        highlights: &[
            "Search ranked by edition match and campus distance",
            "Escrow release tied to pickup confirmation",
        ],
    },
    Project {
        location: "/projects/fullstack/3",
        name: "ThreadSpace",
        file: "/projects/fullstack/ThreadSpace.jsx",
        category: "Full Stack",
        kind: ContentKind::JavaScriptJsx,
        summary: "Discussion forum with threaded replies and live presence.",
        tech: &["React", "tRPC", "Redis"],
        highlights: &[
            "Optimistic replies reconcile against server ordering",
            "Presence fan-out via Redis pub/sub",
        ],
    },
    Project {
        location: "/projects/ml/1",
        name: "Mitra",
        file: "/projects/ml/Mitra.py",
        category: "ML",
        kind: ContentKind::Python,
        summary: "Mental-health chat companion with guardrailed responses.",
        tech: &["Python", "PyTorch", "FastAPI"],
        highlights: &[
            "Intent classifier fine-tuned on counselling transcripts",
            "Escalation paths for crisis keywords, human-reviewed",
        ],
    },
    Project {
        location: "/projects/ml/2",
        name: "QueryGenie",
        file: "/projects/ml/QueryGenie.py",
        category: "ML",
        kind: ContentKind::Python,
        summary: "Natural language to SQL over arbitrary Postgres schemas.",
        tech: &["Python", "LangChain", "PostgreSQL"],
        highlights: &[
            "Schema summarization keeps prompts under budget",
            "Generated SQL sandboxed behind a read-only role",
        ],
    },
    Project {
        location: "/projects/android/1",
        name: "Commute",
        file: "/projects/android/Commute.jsx",
        category: "Android",
        kind: ContentKind::JavaScriptJsx,
        summary: "Offline-first bus timetable app for tier-2 cities.",
        tech: &["React Native", "SQLite", "Expo"],
        highlights: &[
            "Full schedule usable with zero connectivity",
            "Crowd-sourced delay reports with decay weighting",
        ],
    },
    Project {
        location: "/projects/cpp/1",
        name: "MiniMart",
        file: "/projects/cpp/MiniMart.cpp",
        category: "C++",
        kind: ContentKind::Cpp,
        summary: "Terminal point-of-sale system for a family store.",
        tech: &["C++17", "SQLite", "ncurses"],
        highlights: &[
            "Sub-millisecond barcode lookup over 30k SKUs",
            "Daily ledger export compatible with Tally",
        ],
    },
];

fn project(p: &Project, theme: &UiTheme) -> Page {
    let mut lines = vec![
        breadcrumb(p.file, theme),
        Line::default(),
        Line::from(vec![
            Span::styled("category: ", Style::default().fg(theme.text)),
            Span::styled(p.category, Style::default().fg(theme.accent)),
        ]),
        Line::default(),
        plain(p.summary, theme),
        Line::default(),
        section("Stack", theme),
        Line::from(Span::styled(
            format!("  {}", p.tech.join(" · ")),
            Style::default().fg(theme.text_secondary),
        )),
        Line::default(),
        section("Highlights", theme),
    ];
    for highlight in p.highlights {
        lines.push(bullet(*highlight, theme));
    }
    Page {
        heading: p.name.to_string(),
        animate_heading: false,
        kind: p.kind,
        body: Text::from(lines),
    }
}
