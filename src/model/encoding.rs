use std::fmt;

/// How often something was done in childhood (play outdoors, read books)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Frequently,
    Occasionally,
    Rarely,
}

impl Frequency {
    /// Plot order
    pub const ALL: [Frequency; 3] = [
        Frequency::Frequently,
        Frequency::Occasionally,
        Frequency::Rarely,
    ];

    /// Parse a survey answer. Play and reading phrasings share one vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "よく遊んでいた" | "よく読んでいた" => Some(Frequency::Frequently),
            "たまに遊んでいた" | "たまに読んでいた" => Some(Frequency::Occasionally),
            "ほとんど遊ばなかった" | "ほとんど読まなかった" => Some(Frequency::Rarely),
            _ => None,
        }
    }

    pub fn code(&self) -> f64 {
        match self {
            Frequency::Frequently => 3.0,
            Frequency::Occasionally => 2.0,
            Frequency::Rarely => 1.0,
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            Frequency::Frequently => "Frequently",
            Frequency::Occasionally => "Occasionally",
            Frequency::Rarely => "Rarely",
        }
    }

    pub fn japanese(&self) -> &'static str {
        match self {
            Frequency::Frequently => "よく",
            Frequency::Occasionally => "たまに",
            Frequency::Rarely => "ほとんどない",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.english())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "男性" => Some(Gender::Male),
            "女性" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Female = 1
    pub fn code(&self) -> f64 {
        match self {
            Gender::Male => 0.0,
            Gender::Female => 1.0,
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn japanese(&self) -> &'static str {
        match self {
            Gender::Male => "男性",
            Gender::Female => "女性",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.english())
    }
}

/// Childhood residence area, ordered by urbanization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidenceArea {
    Rural,
    RegionalCity,
    Suburban,
    Urban,
}

impl ResidenceArea {
    pub const ALL: [ResidenceArea; 4] = [
        ResidenceArea::Rural,
        ResidenceArea::RegionalCity,
        ResidenceArea::Suburban,
        ResidenceArea::Urban,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "農村・漁村" => Some(ResidenceArea::Rural),
            "地方中心市街地" => Some(ResidenceArea::RegionalCity),
            "郊外住宅地・団地" => Some(ResidenceArea::Suburban),
            "都心・都市部" => Some(ResidenceArea::Urban),
            _ => None,
        }
    }

    /// Urbanization scale, rural = 1 through urban = 4
    pub fn code(&self) -> f64 {
        match self {
            ResidenceArea::Rural => 1.0,
            ResidenceArea::RegionalCity => 2.0,
            ResidenceArea::Suburban => 3.0,
            ResidenceArea::Urban => 4.0,
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            ResidenceArea::Rural => "Rural",
            ResidenceArea::RegionalCity => "Regional City",
            ResidenceArea::Suburban => "Suburban",
            ResidenceArea::Urban => "Urban",
        }
    }

    pub fn japanese(&self) -> &'static str {
        match self {
            ResidenceArea::Rural => "農村・漁村",
            ResidenceArea::RegionalCity => "地方中心市街地",
            ResidenceArea::Suburban => "郊外住宅地・団地",
            ResidenceArea::Urban => "都心・都市部",
        }
    }
}

impl fmt::Display for ResidenceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.english())
    }
}
