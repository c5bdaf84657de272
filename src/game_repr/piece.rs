#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Type {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Type {
    pub const ALL: [Type; 6] = [
        Type::Pawn,
        Type::Knight,
        Type::Bishop,
        Type::Rook,
        Type::Queen,
        Type::King,
    ];

    /// Kinds a pawn may promote to, in generation order
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase letter used by FEN and UCI promotion suffixes
    pub fn to_char(self) -> char {
        match self {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Type> {
        match c.to_ascii_lowercase() {
            'p' => Some(Type::Pawn),
            'n' => Some(Type::Knight),
            'b' => Some(Type::Bishop),
            'r' => Some(Type::Rook),
            'q' => Some(Type::Queen),
            'k' => Some(Type::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank index pawns of this color start on
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    /// Rank index pawns of this color promote on
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    /// Direction of pawn travel in square-index units
    pub const fn forward(self) -> i8 {
        match self {
            Self::White => 8,
            Self::Black => -8,
        }
    }
}

/// A colored piece. Pieces carry no behavior of their own; movement rules
/// are looked up by [`Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// FEN letter: uppercase for White, lowercase for Black
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = Type::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }
}
