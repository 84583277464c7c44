use crate::quiz::Question;

pub fn load_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the primary purpose of a Thread?",
            [
                "Pause execution",
                "Allow concurrent execution",
                "Handle file I/O",
                "Define class structure",
            ],
            1,
        ),
        Question::new(
            "Which data structure works on LIFO?",
            ["Queue", "Array", "Stack", "Linked List"],
            2,
        ),
        Question::new(
            "Which mechanism handles runtime errors?",
            ["If/Else", "Try...Catch", "Console.log", "Event Listeners"],
            1,
        ),
        Question::new(
            "Which HTML tag creates a link?",
            ["<link>", "<href>", "<a>", "<nav>"],
            2,
        ),
        Question::new(
            "Converting data to JSON string is:",
            ["Inheritance", "Polymorphism", "Strings", "Encapsulation"],
            2,
        ),
    ]
}
