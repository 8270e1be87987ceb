use crate::models::{InterestPath, Quote};

pub(super) const PATHS: &[InterestPath] = &[
    InterestPath {
        id: "frontend",
        resources: &[
            "MDN Web Docs - https://developer.mozilla.org",
            "JavaScript.info - https://javascript.info",
            "CSS-Tricks - https://css-tricks.com",
            "Frontend Masters - https://frontendmasters.com",
            "web.dev - https://web.dev/learn",
        ],
        milestones: &[
            "Master semantic HTML and modern CSS layouts",
            "Learn JavaScript fundamentals and the DOM",
            "Build a project with a component framework",
            "Add state management and client-side routing",
            "Ship an accessible, performant web application",
        ],
        tips: &[
            "Rebuild small UIs you like from scratch to learn layout",
            "Use the browser devtools every day",
            "Learn accessibility early, not as an afterthought",
            "Read the framework docs before reaching for tutorials",
        ],
    },
    InterestPath {
        id: "backend",
        resources: &[
            "The Twelve-Factor App - https://12factor.net",
            "Designing Data-Intensive Applications by Martin Kleppmann",
            "PostgreSQL Tutorial - https://www.postgresqltutorial.com",
            "RESTful API Design - https://restfulapi.net",
            "roadmap.sh Backend - https://roadmap.sh/backend",
        ],
        milestones: &[
            "Learn a server-side language and its standard library",
            "Model data and query a relational database",
            "Build and document a REST API",
            "Add authentication, authorization and input validation",
            "Deploy a service with logging, metrics and tests",
        ],
        tips: &[
            "Write integration tests against a real database",
            "Log with structure so you can search it later",
            "Keep handlers thin and push logic into plain functions",
            "Learn how HTTP status codes are meant to be used",
        ],
    },
    InterestPath {
        id: "devops",
        resources: &[
            "Docker Documentation - https://docs.docker.com",
            "Kubernetes Documentation - https://kubernetes.io/docs",
            "The Phoenix Project by Gene Kim",
            "Terraform Tutorials - https://developer.hashicorp.com/terraform/tutorials",
            "Site Reliability Engineering - https://sre.google/books",
        ],
        milestones: &[
            "Get comfortable with Linux and shell scripting",
            "Containerize an application with Docker",
            "Set up a CI/CD pipeline",
            "Provision infrastructure as code",
            "Operate a service on Kubernetes with monitoring",
        ],
        tips: &[
            "Automate anything you have done manually twice",
            "Keep infrastructure changes in version control",
            "Practice restoring from backups, not just taking them",
            "Learn to read logs before you learn new tools",
        ],
    },
    InterestPath {
        id: "mobile",
        resources: &[
            "Android Developers - https://developer.android.com",
            "Apple Developer Documentation - https://developer.apple.com/documentation",
            "Flutter Documentation - https://docs.flutter.dev",
            "React Native - https://reactnative.dev",
            "Material Design - https://m3.material.io",
        ],
        milestones: &[
            "Pick a platform and learn its language",
            "Build screens with the platform UI toolkit",
            "Persist data locally and sync with an API",
            "Handle permissions, notifications and background work",
            "Publish an app to a store",
        ],
        tips: &[
            "Test on a real device as early as possible",
            "Design for small screens and slow networks",
            "Follow the platform's human interface guidelines",
            "Keep release builds reproducible",
        ],
    },
    InterestPath {
        id: "data_science",
        resources: &[
            "Python Data Science Handbook by Jake VanderPlas",
            "Kaggle Learn - https://www.kaggle.com/learn",
            "pandas Documentation - https://pandas.pydata.org/docs",
            "Storytelling with Data by Cole Nussbaumer Knaflic",
            "StatQuest - https://statquest.org",
        ],
        milestones: &[
            "Learn Python, NumPy and pandas",
            "Refresh statistics and probability",
            "Clean, explore and visualize a real dataset",
            "Build and evaluate predictive models",
            "Present a complete analysis to an audience",
        ],
        tips: &[
            "Spend time understanding the data before modeling it",
            "Keep notebooks reproducible from top to bottom",
            "A clear chart beats a complex model",
            "Version your datasets as well as your code",
        ],
    },
    InterestPath {
        id: "machine_learning",
        resources: &[
            "fast.ai - https://course.fast.ai",
            "Deep Learning by Goodfellow, Bengio and Courville",
            "scikit-learn User Guide - https://scikit-learn.org/stable/user_guide.html",
            "Papers with Code - https://paperswithcode.com",
            "Hands-On Machine Learning by Aurelien Geron",
        ],
        milestones: &[
            "Review linear algebra and calculus basics",
            "Train classical models with scikit-learn",
            "Build neural networks with a deep learning framework",
            "Reproduce a published result",
            "Deploy a model behind an API",
        ],
        tips: &[
            "Start with a simple baseline before anything deep",
            "Track every experiment you run",
            "Watch for leakage between training and test data",
            "Read papers with the code open next to them",
        ],
    },
    InterestPath {
        id: "security",
        resources: &[
            "OWASP Top Ten - https://owasp.org/www-project-top-ten",
            "PortSwigger Web Security Academy - https://portswigger.net/web-security",
            "TryHackMe - https://tryhackme.com",
            "The Web Application Hacker's Handbook",
            "Cryptography I - https://www.coursera.org/learn/crypto",
        ],
        milestones: &[
            "Learn networking and operating system fundamentals",
            "Understand the OWASP Top Ten vulnerabilities",
            "Practice on legal capture-the-flag challenges",
            "Perform a threat model of a real application",
            "Harden and audit a deployed service",
        ],
        tips: &[
            "Only test systems you are authorized to test",
            "Learn how things work before learning how they break",
            "Write up every challenge you solve",
            "Follow security advisories for the tools you use",
        ],
    },
];

pub(super) const QUOTES: &[Quote] = &[
    Quote::new("The only way to learn a new programming language is by writing programs in it.", "Dennis Ritchie"),
    Quote::new("First, solve the problem. Then, write the code.", "John Johnson"),
    Quote::new("Simplicity is prerequisite for reliability.", "Edsger W. Dijkstra"),
    Quote::new("Programs must be written for people to read, and only incidentally for machines to execute.", "Harold Abelson"),
    Quote::new("Make it work, make it right, make it fast.", "Kent Beck"),
    Quote::new("The expert in anything was once a beginner.", "Helen Hayes"),
    Quote::new("It always seems impossible until it's done.", "Nelson Mandela"),
    Quote::new("Talk is cheap. Show me the code.", "Linus Torvalds"),
    Quote::new("Learning never exhausts the mind.", "Leonardo da Vinci"),
    Quote::new("The best way to predict the future is to invent it.", "Alan Kay"),
];
