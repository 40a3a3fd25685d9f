//! The built-in character table
//!
//! Each entry is `head(similar shapes)(radical family)`. For example
//! `木(本术未末)(林森)` lists 本术未末 as look-alikes of 木 and 林森 as
//! characters built from it. The second group is optional.

pub const RAW_GROUPS: &[&str] = &[
    "一(二三)(T工)",
    "人(入八乂)(从众)",
    "日(曰目旦旧)(白田甲由申)",
    "木(本术未末)(林森)",
    "大(太犬天)(夫夭)",
    "土(士)(干工)",
    "王(玉)(主五)",
    "口(回吕)(品唱)",
    "田(甲由申)(电)",
    "刀(力刃)(刁)",
    "又(叉)(文支)",
    "水(冰永)(氺)",
    "火(灭炎)(伙)",
    "月(用)(甩)",
    "己(已)(巳)",
    "析(拆)(折)",
    "贝(见)(页)",
    "牛(午)(생)",
    "手(毛)(拜)",
    "气(乞)(氛)",
    "免(兔)(晚)",
    "乌(鸟)(鸣)",
    "乒(乓)(兵)",
    "戊(戌)(戍戎)",
    "治(冶)(法)",
    "末(未)(味)",
    "博(搏)(膊)",
    "辩(辨)(辫瓣)",
    "燥(躁)(澡操)",
    "准(淮)(谁)",
    "形(型)(邢)",
    "盲(育)(妄)",
    "很(狠)(跟)",
    "受(爱)(授)",
    "光(光)(辉)",
];
