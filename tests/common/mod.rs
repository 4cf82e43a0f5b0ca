#![allow(dead_code)]

/// Several thousand letters of ordinary English prose.
pub const ENGLISH_SAMPLE: &str = "\
The village stood at the edge of a wide river, and in the early mornings the mist \
rose from the water and drifted slowly between the houses. Most of the people who \
lived there had been born in the same streets as their parents, and they knew every \
path through the fields and every stone of the old bridge. In the summer the children \
spent whole days on the banks, fishing with lines made from thread and bent pins, \
while their mothers washed linen in the shallows and talked about the price of bread.

On the hill above the village there was a large house with tall windows and a garden \
surrounded by a grey wall. Nobody could remember who had built it, but everyone agreed \
that it had once belonged to a family of merchants who traded wool and salt with the \
towns along the coast. The last of that family was an old woman who seldom left her \
rooms. Her servants came down to the market twice a week, bought what was needed, and \
returned without saying more than a few polite words to anyone.

One autumn a young doctor arrived to take the place of the man who had looked after \
the village for nearly forty years. He rented two rooms above the bakery, hung a small \
painted sign beside the door, and waited for patients. At first very few came. The \
farmers trusted the remedies their grandmothers had taught them, and they were \
suspicious of a stranger who wrote long notes in a leather book and asked questions \
about what they ate and how they slept. But the winter that followed was hard, and \
when a fever spread through the cottages near the mill, the doctor worked day and \
night, walking from house to house through the snow with his bag in one hand and a \
lantern in the other. By the spring there was not a family in the valley that did \
not speak of him with gratitude.

It was during that spring that he received a letter from the house on the hill. The \
old woman wished to see him, the letter said, on a matter of some importance. He \
climbed the steep road the next afternoon and was shown into a long room filled with \
books and maps. She was sitting near the fire with a blanket over her knees, and she \
looked at him for a long time before she spoke. She told him that she was not ill, \
or at least not in any way that medicine could cure, but that she needed someone she \
could trust to read through the papers her father had left, and to decide what \
should be done with them after her death.

The doctor had no reason to refuse, and over the following months he spent many \
evenings in that quiet room, sorting bundles of letters, accounts, and journals that \
had been tied with faded ribbon and stored in wooden chests. Much of it was dull: \
lists of cargo, the wages of sailors, complaints about the weather and the roads. \
Yet here and there he found passages that made him stop and read again. There were \
descriptions of distant harbours, of storms that lasted for weeks, of a ship that \
had been lost with all its men, and of a quarrel between two brothers that had never \
been settled. Slowly he began to understand why the old woman had lived alone for so \
long, and why the people of the village spoke of her family with a mixture of \
respect and unease.

When the summer came again the doctor had finished his work. He brought the old woman \
a short written account of everything he had found, and he read it aloud to her one \
evening while the light faded over the river. She listened without interrupting, and \
when he had finished she thanked him and asked him to burn most of the papers, to \
give the journals to the school in the town, and to keep the maps for himself. He \
did as she asked. In the years that followed he often unrolled those maps on the \
table in his small room above the bakery, and traced with his finger the routes of \
ships that had sailed long before he was born, thinking of the strange and patient \
way in which the past finds its way into the present.

The village changed slowly after that. A new road was built along the river, and \
carts began to come through every day carrying timber and grain to the markets in \
the south. Some of the young men left to find work in the cities, and some of them \
came back with money and new ideas, while others were never heard from again. The \
school grew larger, and a library was opened in one of the rooms of the old house on \
the hill, which had been given to the village after the death of its owner. The \
doctor grew older, married the daughter of the miller, and raised three children who \
learned to read from the journals that he had once sorted by the light of the fire.
";

/// Reduces text to lowercase ASCII letters.
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
