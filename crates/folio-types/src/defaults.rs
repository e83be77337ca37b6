//! Built-in documents used when the data file cannot be loaded.

use crate::document::PortfolioDocument;
use serde_json::json;

/// Default content of the student edition.
pub fn student_document() -> PortfolioDocument {
    PortfolioDocument::new(json!({
        "personal": {
            "name": "Tarequl Islam",
            "title": "Student Developer",
            "tagline": "Student at United International University",
            "bio": "Tarequl Islam | Student at United International University | Backend web developer(Node.js , Express , MySQL) | UI/UX Designer |Python, C, and Java",
            "email": "tareq.tmns@email.com",
            "phone": "+880 1682909653",
            "location": "Dhaka, Bangladesh"
        },
        "skills": {
            "frontend": ["React", "Vue.js", "Angular", "TypeScript", "HTML5", "Tailwind CSS"],
            "backend": ["Node.js", "Python", "Java", "Express.js", "Django"],
            "database": ["MongoDB", "PostgreSQL", "MySQL"],
            "devops": ["Git"],
            "tools": ["VS Code", "Figma", "Postman", "Jira"]
        },
        "programmingLanguages": [
            {
                "name": "JavaScript",
                "proficiency": 70,
                "description": "Intermediate - Full-stack development, Node.js, React"
            },
            {
                "name": "Python",
                "proficiency": 45,
                "description": "Beginner - Backend development, Django, data analysis"
            },
            {
                "name": "Java",
                "proficiency": 65,
                "description": "Intermediate - Desktop applications, Android development"
            },
            {
                "name": "C",
                "proficiency": 70,
                "description": "Intermediate - System programming, algorithms"
            },
            {
                "name": "HTML/CSS",
                "proficiency": 80,
                "description": "Advanced - Web development, responsive design"
            }
        ],
        "experience": [
            {
                "title": "Backend Developer Intern",
                "company": "Tech Solutions Ltd.",
                "period": "June 2023 - August 2023",
                "description": "Developed RESTful APIs using Node.js and Express. Collaborated with frontend developers to integrate APIs with React applications. Improved database performance by optimizing queries in MongoDB.",
                "technologies": ["Node.js", "Express", "MongoDB", "React"]
            }
        ],
        "projects": [
            {
                "title": "Chess engine",
                "description": "offline 2 player chess game",
                "image": "project1.jpg",
                "technologies": ["Java", "JavaFX", "MySQL", "SceneBuilder"],
                "liveUrl": "#",
                "githubUrl": "https://github.com/tarequl822/chess-game",
                "category": "app"
            }
        ],
        "testimonials": [],
        "social": {
            "github": "https://github.com/tarequl822",
            "linkedin": "https://www.linkedin.com/in/tarequlislam-2b5a52269/",
            "facebook": "https://www.facebook.com/mdtarequl.is",
            "instagram": "https://www.instagram.com/_tarequl__islam/"
        }
    }))
}

/// Default content of the showcase edition.
pub fn showcase_document() -> PortfolioDocument {
    PortfolioDocument::new(json!({
        "personal": {
            "name": "Tarequl Islam",
            "title": "Full-Stack Software Engineer",
            "tagline": "Crafting Digital Experiences with Code & Creativity",
            "bio": "Passionate software engineer with 5+ years of experience building scalable web applications and mobile apps.",
            "email": "alex.chen@email.com",
            "phone": "+1 (555) 123-4567",
            "location": "San Francisco, CA"
        },
        "skills": {
            "frontend": ["React", "Vue.js", "Angular", "TypeScript"],
            "backend": ["Node.js", "Python", "Java", "C#"],
            "database": ["MongoDB", "PostgreSQL", "MySQL", "Redis"],
            "devops": ["Docker", "AWS", "Azure", "Git"]
        },
        "experience": [
            {
                "title": "Senior Software Engineer",
                "company": "TechCorp Inc.",
                "period": "2022 - Present",
                "description": "Leading development of enterprise web applications.",
                "technologies": ["React", "Node.js", "MongoDB", "AWS"]
            }
        ],
        "projects": [
            {
                "title": "E-Commerce Platform",
                "description": "A full-stack e-commerce solution with user authentication.",
                "image": "project1.jpg",
                "technologies": ["React", "Node.js", "MongoDB", "Stripe"],
                "liveUrl": "#",
                "githubUrl": "#",
                "category": "web-app"
            }
        ],
        "testimonials": [
            {
                "name": "Sarah Johnson",
                "role": "Product Manager",
                "company": "TechCorp Inc.",
                "quote": "Alex is an exceptional developer who consistently delivers high-quality code.",
                "avatar": "testimonial1.jpg"
            }
        ],
        "social": {
            "github": "#",
            "linkedin": "#",
            "twitter": "#",
            "instagram": "#"
        }
    }))
}
