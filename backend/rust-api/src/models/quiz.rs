use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based position inside its variant.
    pub number: usize,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizVariant {
    /// Six options per question, one per career track.
    #[default]
    Extended,
    /// Four options per question.
    Compact,
}

impl QuizVariant {
    pub fn questions(&self) -> &'static [Question] {
        match self {
            QuizVariant::Extended => EXTENDED_QUESTIONS,
            QuizVariant::Compact => COMPACT_QUESTIONS,
        }
    }

    pub fn options_per_question(&self) -> usize {
        match self {
            QuizVariant::Extended => 6,
            QuizVariant::Compact => 4,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions().len()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizVariant::Extended => "extended",
            QuizVariant::Compact => "compact",
        }
    }
}

// Option order follows CareerCategory declaration order.
static EXTENDED_QUESTIONS: &[Question] = &[
    Question {
        number: 1,
        prompt: "Which kind of problem do you enjoy solving the most?",
        options: &[
            "Designing and building complete applications",
            "Finding weaknesses before attackers do",
            "Discovering patterns hidden in data",
            "Keeping large systems running at scale",
            "Teaching machines to make decisions",
            "Crafting smooth experiences on phones",
        ],
    },
    Question {
        number: 2,
        prompt: "Which university module did you like best?",
        options: &[
            "Software Engineering and Design Patterns",
            "Network Security and Cryptography",
            "Statistics and Data Mining",
            "Distributed Systems and Networking",
            "Machine Learning and Neural Networks",
            "Mobile Application Development",
        ],
    },
    Question {
        number: 3,
        prompt: "What would you build for your final year project?",
        options: &[
            "A full-stack web platform for a local business",
            "An intrusion detection system for campus networks",
            "A dashboard predicting crop yields from open data",
            "An auto-scaling deployment pipeline on the cloud",
            "A Sinhala and Tamil speech recognition model",
            "A ride-sharing app for university students",
        ],
    },
    Question {
        number: 4,
        prompt: "Which tool would you most like to master?",
        options: &[
            "Git and a modern IDE",
            "Wireshark and Burp Suite",
            "Jupyter, pandas and SQL",
            "Terraform, Docker and Kubernetes",
            "PyTorch or TensorFlow",
            "Flutter or Kotlin",
        ],
    },
    Question {
        number: 5,
        prompt: "How do you prefer to spend a hackathon?",
        options: &[
            "Writing most of the core code",
            "Running a capture-the-flag challenge",
            "Cleaning and analysing the provided dataset",
            "Setting up hosting and CI for the team",
            "Training a model for the demo",
            "Building the app the judges will tap through",
        ],
    },
    Question {
        number: 6,
        prompt: "Which news headline would you click first?",
        options: &[
            "New release of a popular programming language",
            "Major data breach at a global company",
            "How analytics changed a cricket team's strategy",
            "Cloud provider opens a new region in South Asia",
            "Breakthrough in large language models",
            "Top trending apps on the Play Store",
        ],
    },
    Question {
        number: 7,
        prompt: "What kind of work environment suits you best?",
        options: &[
            "A product team shipping features every sprint",
            "A security operations centre watching for threats",
            "A research group answering business questions",
            "An infrastructure team owning uptime",
            "An AI lab experimenting with new models",
            "A startup focused on a consumer app",
        ],
    },
    Question {
        number: 8,
        prompt: "Which skill do you most want to improve?",
        options: &[
            "Writing clean, maintainable code",
            "Thinking like an attacker",
            "Telling stories with data",
            "Automating infrastructure",
            "Understanding the maths behind models",
            "Designing intuitive mobile interfaces",
        ],
    },
    Question {
        number: 9,
        prompt: "Which certification sounds most valuable to you?",
        options: &[
            "Professional Scrum Developer",
            "Certified Ethical Hacker",
            "Google Data Analytics",
            "AWS Solutions Architect",
            "TensorFlow Developer",
            "Associate Android Developer",
        ],
    },
    Question {
        number: 10,
        prompt: "Where do you see yourself in five years?",
        options: &[
            "Leading engineering on a large software product",
            "Heading a security team or consultancy",
            "Driving decisions as a lead data scientist",
            "Architecting cloud platforms for enterprises",
            "Building AI products used across Sri Lanka",
            "Publishing apps used by millions",
        ],
    },
];

static COMPACT_QUESTIONS: &[Question] = &[
    Question {
        number: 1,
        prompt: "What excites you most about technology?",
        options: &[
            "Building software people use every day",
            "Protecting systems from attacks",
            "Finding insights in data",
            "Running services in the cloud",
        ],
    },
    Question {
        number: 2,
        prompt: "Which task would you pick first?",
        options: &[
            "Implement a new feature",
            "Audit a login page",
            "Build a sales report",
            "Deploy a web server",
        ],
    },
    Question {
        number: 3,
        prompt: "Which subject comes most naturally to you?",
        options: &[
            "Programming",
            "Networking and security",
            "Mathematics and statistics",
            "Operating systems",
        ],
    },
    Question {
        number: 4,
        prompt: "How do you like to work?",
        options: &[
            "Shipping code with a product team",
            "Investigating incidents",
            "Analysing trends",
            "Automating operations",
        ],
    },
    Question {
        number: 5,
        prompt: "Which internship would you accept?",
        options: &[
            "Software engineering intern",
            "Security analyst intern",
            "Data analyst intern",
            "DevOps intern",
        ],
    },
];
