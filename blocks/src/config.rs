use crate::{Block, Delimiter};

pub const DELIM: Delimiter = Delimiter::new(' ');

pub const BLOCKS: [Block; 7] = [
    // icon, command, update interval, update signal
    Block::new("", " cat ~/.pacupdate | sed /\u{1f4e6}0/d", 3600, 0),
    Block::new("", " bandwidth ", 1, 0),
    Block::new("     ", " spotify-status ", 1, 0),
    Block::new(
        "     \u{f538} ",
        " free -h | awk '/Mem:/ NR>1 {printf $3} NR>1 {print $7}' \
         | sed 's/i/ ~ /1' | sed 's/i//1' ",
        5,
        0,
    ),
    Block::new(
        "     \u{f76b} ",
        " sensors | awk '/Tctl:/ {print $2}' | sed 's/+//g' ",
        1,
        0,
    ),
    Block::new("     ", " volume ", 0, 10),
    Block::new("     \u{f017} ", " clock", 60, 0),
];
